//! Core string transforms: tokenizer, case joiner and pluralization rules

pub mod case;
pub mod error;
pub mod inflect;
pub mod pluralize;
pub mod tokenize;
pub mod value;

pub use case::{CasePolicy, capitalize, to_case};
pub use error::{CasekitError, Result};
pub use inflect::Inflect;
pub use pluralize::Pluralizer;
pub use tokenize::Tokenizer;
pub use value::HostValue;
