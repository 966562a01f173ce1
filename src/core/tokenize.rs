//! Word tokenizer for identifier-like strings
//!
//! Splits mixed-convention identifiers (`HTMLParser`, `user_profile_id`,
//! `user-profile-ID`) into lowercase word tokens. Boundaries come from case
//! transitions, acronym runs and separators.

use fancy_regex::Regex;
use std::sync::OnceLock;

/// Alternatives are tried in order at each position:
/// lowercase/digit run, uppercase/digit run not followed by a lowercase
/// letter (acronyms, CONSTANT segments), then a capitalized word.
const WORD_PATTERN: &str = r"[a-z0-9]+|[A-Z0-9]+(?![a-z])|[A-Z][a-z0-9]+";

/// Splits strings into lowercase word tokens
pub struct Tokenizer;

impl Tokenizer {
    /// Split `input` into its lowercase word tokens
    ///
    /// Characters outside the three word patterns (punctuation, whitespace,
    /// separators) only delimit tokens and never appear in the output.
    ///
    /// # Examples
    ///
    /// ```
    /// use casekit::core::tokenize::Tokenizer;
    ///
    /// assert_eq!(Tokenizer::tokenize("HTMLParser"), vec!["html", "parser"]);
    /// assert_eq!(Tokenizer::tokenize("user-profile-ID"), vec!["user", "profile", "id"]);
    /// assert!(Tokenizer::tokenize("").is_empty());
    /// ```
    pub fn tokenize(input: &str) -> Vec<String> {
        if input.is_empty() {
            return Vec::new();
        }

        let Some(pattern) = word_pattern() else {
            return Self::whole_input(input);
        };

        let mut tokens = Vec::new();
        for found in pattern.find_iter(input) {
            match found {
                Ok(m) => tokens.push(m.as_str().to_lowercase()),
                Err(e) => {
                    tracing::warn!(error = %e, input, "word pattern failed, using whole input");
                    return Self::whole_input(input);
                }
            }
        }
        tokens
    }

    fn whole_input(input: &str) -> Vec<String> {
        if input.is_empty() {
            Vec::new()
        } else {
            vec![input.to_lowercase()]
        }
    }
}

/// Compiled once per process; `None` if compilation ever fails
fn word_pattern() -> Option<&'static Regex> {
    static WORD_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    WORD_REGEX
        .get_or_init(|| match Regex::new(WORD_PATTERN) {
            Ok(regex) => Some(regex),
            Err(e) => {
                tracing::warn!(error = %e, "word pattern did not compile, tokenizer degraded");
                None
            }
        })
        .as_ref()
}
