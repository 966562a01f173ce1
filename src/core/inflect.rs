//! String extension methods

use crate::core::case::{CasePolicy, to_case};
use crate::core::pluralize::Pluralizer;
use crate::core::tokenize::Tokenizer;

/// Inflection helpers available on any string slice
///
/// ```
/// use casekit::prelude::*;
///
/// assert_eq!("UserProfileId".to_case(CasePolicy::Snake), "user_profile_id");
/// assert_eq!("company".pluralized(), "companies");
/// ```
pub trait Inflect {
    /// Lowercase word tokens
    fn tokenized(&self) -> Vec<String>;

    /// Re-case using `policy`
    fn to_case(&self, policy: CasePolicy) -> String;

    /// English plural form
    fn pluralized(&self) -> String;

    /// English singular form
    fn singularized(&self) -> String;
}

impl Inflect for str {
    fn tokenized(&self) -> Vec<String> {
        Tokenizer::tokenize(self)
    }

    fn to_case(&self, policy: CasePolicy) -> String {
        to_case(&self.tokenized(), policy)
    }

    fn pluralized(&self) -> String {
        Pluralizer::pluralize(self)
    }

    fn singularized(&self) -> String {
        Pluralizer::singularize(self)
    }
}
