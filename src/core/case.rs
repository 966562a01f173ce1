//! Case policies and token joining

use crate::core::error::CasekitError;
use crate::core::tokenize::Tokenizer;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A naming convention: separator plus per-token capitalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePolicy {
    /// `userProfileId`
    Camel,
    /// `UserProfileId`
    Pascal,
    /// `user_profile_id`
    Snake,
    /// `user-profile-id`
    Kebab,
    /// `USER_PROFILE_ID`
    Constant,
    /// `user.profile.id`
    Dot,
    /// `user/profile/id`
    Path,
    /// `User profile id`
    Sentence,
    /// `User-Profile-Id`
    Header,
}

impl CasePolicy {
    /// Every policy, in declaration order
    pub const ALL: [CasePolicy; 9] = [
        CasePolicy::Camel,
        CasePolicy::Pascal,
        CasePolicy::Snake,
        CasePolicy::Kebab,
        CasePolicy::Constant,
        CasePolicy::Dot,
        CasePolicy::Path,
        CasePolicy::Sentence,
        CasePolicy::Header,
    ];

    /// Lowercase name used in configuration and for parsing
    pub fn as_str(&self) -> &'static str {
        match self {
            CasePolicy::Camel => "camel",
            CasePolicy::Pascal => "pascal",
            CasePolicy::Snake => "snake",
            CasePolicy::Kebab => "kebab",
            CasePolicy::Constant => "constant",
            CasePolicy::Dot => "dot",
            CasePolicy::Path => "path",
            CasePolicy::Sentence => "sentence",
            CasePolicy::Header => "header",
        }
    }

    /// Join already tokenized words according to this policy
    pub fn join(&self, tokens: &[String]) -> String {
        to_case(tokens, *self)
    }

    /// Tokenize `input` and rejoin it according to this policy
    pub fn convert(&self, input: &str) -> String {
        to_case(&Tokenizer::tokenize(input), *self)
    }
}

impl fmt::Display for CasePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CasePolicy {
    type Err = CasekitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CasePolicy::ALL
            .into_iter()
            .find(|policy| policy.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CasekitError::UnknownCasePolicy(s.to_string()))
    }
}

/// Join `tokens` using `policy`
///
/// # Examples
///
/// ```
/// use casekit::core::case::{to_case, CasePolicy};
/// use casekit::core::tokenize::Tokenizer;
///
/// let tokens = Tokenizer::tokenize("user_profile_id");
/// assert_eq!(to_case(&tokens, CasePolicy::Camel), "userProfileId");
/// assert_eq!(to_case(&tokens, CasePolicy::Header), "User-Profile-Id");
/// ```
pub fn to_case(tokens: &[String], policy: CasePolicy) -> String {
    match policy {
        CasePolicy::Pascal => tokens.iter().map(|t| capitalize(t)).collect(),
        CasePolicy::Camel => tokens
            .iter()
            .enumerate()
            .map(|(i, t)| if i == 0 { t.clone() } else { capitalize(t) })
            .collect(),
        CasePolicy::Snake => tokens.join("_"),
        CasePolicy::Kebab => tokens.join("-"),
        CasePolicy::Dot => tokens.join("."),
        CasePolicy::Path => tokens.join("/"),
        CasePolicy::Constant => tokens.join("_").to_uppercase(),
        CasePolicy::Sentence => {
            let mut words = tokens.iter();
            let Some(first) = words.next() else {
                return String::new();
            };
            std::iter::once(capitalize(first))
                .chain(words.cloned())
                .collect::<Vec<_>>()
                .join(" ")
        }
        CasePolicy::Header => tokens
            .iter()
            .map(|t| capitalize(t))
            .collect::<Vec<_>>()
            .join("-"),
    }
}

/// Uppercase the first character and lowercase the remainder
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
