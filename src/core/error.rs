//! Typed error handling for casekit
//!
//! The string transforms themselves (tokenize, case joining, pluralization)
//! never fail. Errors only come from the boundary: looking up policies or
//! filters by name, validating configuration and rendering templates.
//!
//! # Example
//!
//! ```rust
//! use casekit::prelude::*;
//!
//! let registry = FilterRegistry::global();
//! match registry.apply("shoutcase", &HostValue::from("userId"), &[]) {
//!     Ok(value) => println!("{:?}", value),
//!     Err(CasekitError::UnknownFilter(name)) => println!("no filter named {}", name),
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for casekit
#[derive(Debug, Error)]
pub enum CasekitError {
    /// A case policy name did not match any known policy
    #[error("Unknown case policy: {0}")]
    UnknownCasePolicy(String),

    /// No filter is registered under this name
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// A configured alias is unusable
    #[error("Invalid alias '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },

    /// Template rendering failed in the host engine
    #[error("Template rendering failed: {0}")]
    Render(#[from] tera::Error),
}

impl CasekitError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CasekitError::UnknownCasePolicy(_) => "UNKNOWN_CASE_POLICY",
            CasekitError::UnknownFilter(_) => "UNKNOWN_FILTER",
            CasekitError::InvalidAlias { .. } => "INVALID_ALIAS",
            CasekitError::Render(_) => "RENDER_ERROR",
        }
    }
}

/// Result type for boundary operations
pub type Result<T, E = CasekitError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_filter_display() {
        let err = CasekitError::UnknownFilter("shoutcase".to_string());
        assert!(err.to_string().contains("shoutcase"));
        assert_eq!(err.error_code(), "UNKNOWN_FILTER");
    }

    #[test]
    fn test_invalid_alias_display() {
        let err = CasekitError::InvalidAlias {
            alias: "bad name".to_string(),
            reason: "not an identifier".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("bad name"));
        assert!(display.contains("not an identifier"));
    }

    #[test]
    fn test_from_tera_error() {
        let err: CasekitError = tera::Error::msg("boom").into();
        assert!(matches!(err, CasekitError::Render(_)));
        assert_eq!(err.error_code(), "RENDER_ERROR");
    }
}
