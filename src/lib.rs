//! # casekit
//!
//! Identifier case conversion and English inflection, packaged as named
//! filters for template engines.
//!
//! ## Features
//!
//! - **Tokenizer**: splits mixed-convention identifiers (`HTMLParser`,
//!   `user-profile-ID`, `MY_APP_NAME`) into lowercase words
//! - **Case Policies**: camel, Pascal, snake, kebab, constant, dot, path,
//!   sentence and header case
//! - **Pluralization**: English suffix rules with irregular exceptions
//!   (company → companies, child → children)
//! - **Filter Registry**: a name → function lookup table with the usual
//!   aliases (`camelcase`, `camelCase`, ...)
//! - **Tera Integration**: register every filter on a `tera::Tera` instance
//! - **Configuration-Based**: choose a filter profile and add aliases via YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use casekit::prelude::*;
//!
//! let tokens = Tokenizer::tokenize("HTMLParser");
//! assert_eq!(tokens, vec!["html", "parser"]);
//! assert_eq!(to_case(&tokens, CasePolicy::Kebab), "html-parser");
//!
//! assert_eq!(Pluralizer::pluralize("company"), "companies");
//! assert_eq!(Pluralizer::singularize("People"), "Person");
//!
//! let mut context = Context::new();
//! context.insert("name", "user_profile");
//! let out = render_str("{{ name | pascalcase | pluralize }}", &context).unwrap();
//! assert_eq!(out, "UserProfiles");
//! ```

pub mod config;
pub mod core;
pub mod filters;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        case::{CasePolicy, capitalize, to_case},
        error::{CasekitError, Result},
        inflect::Inflect,
        pluralize::Pluralizer,
        tokenize::Tokenizer,
        value::HostValue,
    };

    // === Filters ===
    pub use crate::filters::{
        FilterArgs, FilterEntry, FilterFn, FilterGroup, FilterOptions, FilterRegistry,
        template::{engine, register, register_with, render_str},
    };

    // === Config ===
    pub use crate::config::{KitConfig, Profile};

    // === External dependencies ===
    pub use tera::{Context, Tera};
}
