//! Rule-based pluralization for English nouns
//!
//! Handles the common English suffix rules plus a small table of irregular
//! forms. Words are transformed as a whole; only the exception table ever
//! changes the casing of the input.

/// Irregular singular/plural pairs, lowercase
pub const EXCEPTIONS: [(&str, &str); 8] = [
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("foot", "feet"),
    ("mouse", "mice"),
    ("goose", "geese"),
];

/// Utility for converting between singular and plural forms of English nouns
pub struct Pluralizer;

impl Pluralizer {
    /// Convert a singular noun to its plural form
    ///
    /// # Examples
    ///
    /// ```
    /// use casekit::core::pluralize::Pluralizer;
    ///
    /// assert_eq!(Pluralizer::pluralize("user"), "users");
    /// assert_eq!(Pluralizer::pluralize("company"), "companies");
    /// assert_eq!(Pluralizer::pluralize("address"), "addresses");
    /// assert_eq!(Pluralizer::pluralize("Person"), "People");
    /// ```
    pub fn pluralize(singular: &str) -> String {
        if singular.is_empty() {
            return singular.to_string();
        }

        let lower = singular.to_lowercase();
        if let Some((_, plural)) = EXCEPTIONS.iter().find(|(s, _)| *s == lower) {
            return match_initial_case(singular, plural);
        }

        match singular {
            // Consonant + y -> ies
            s if s.ends_with('y') && !follows_vowel(s) && s.chars().count() > 1 => {
                format!("{}ies", &s[..s.len() - 1])
            }

            // Sibilants -> es
            s if s.ends_with('s')
                || s.ends_with('x')
                || s.ends_with('z')
                || s.ends_with("ch")
                || s.ends_with("sh") =>
            {
                format!("{}es", s)
            }

            s if s.ends_with('f') => format!("{}ves", &s[..s.len() - 1]),

            s if s.ends_with("fe") => format!("{}ves", &s[..s.len() - 2]),

            // Consonant + o -> oes
            s if s.ends_with('o') && !follows_vowel(s) && s.chars().count() > 1 => {
                format!("{}es", s)
            }

            s => format!("{}s", s),
        }
    }

    /// Convert a plural noun to its singular form
    ///
    /// `ves` always restores `f`, so `knives` becomes `knif`.
    ///
    /// # Examples
    ///
    /// ```
    /// use casekit::core::pluralize::Pluralizer;
    ///
    /// assert_eq!(Pluralizer::singularize("users"), "user");
    /// assert_eq!(Pluralizer::singularize("companies"), "company");
    /// assert_eq!(Pluralizer::singularize("addresses"), "address");
    /// assert_eq!(Pluralizer::singularize("People"), "Person");
    /// ```
    pub fn singularize(plural: &str) -> String {
        if plural.is_empty() {
            return plural.to_string();
        }

        let lower = plural.to_lowercase();
        if let Some((singular, _)) = EXCEPTIONS.iter().find(|(_, p)| *p == lower) {
            return match_initial_case(plural, singular);
        }

        match plural {
            s if s.ends_with("ies") && s.chars().count() > 3 => {
                format!("{}y", &s[..s.len() - 3])
            }

            s if s.ends_with("ves") => format!("{}f", &s[..s.len() - 3]),

            // Sibilant and o plurals carry an extra "es"
            s if s.ends_with("es")
                && s.chars().count() > 2
                && (s.ends_with("ses")
                    || s.ends_with("xes")
                    || s.ends_with("zes")
                    || s.ends_with("ches")
                    || s.ends_with("shes")
                    || s.ends_with("oes")) =>
            {
                s[..s.len() - 2].to_string()
            }

            s if s.ends_with('s') && s.chars().count() > 1 => s[..s.len() - 1].to_string(),

            s => s.to_string(),
        }
    }
}

/// Whether the character before the last one is a vowel (case-insensitive)
fn follows_vowel(word: &str) -> bool {
    word.chars()
        .rev()
        .nth(1)
        .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
}

/// Title-case `replacement` when `original` starts with an uppercase letter
fn match_initial_case(original: &str, replacement: &str) -> String {
    if original.chars().next().is_some_and(char::is_uppercase) {
        crate::core::case::capitalize(replacement)
    } else {
        replacement.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize_regular() {
        assert_eq!(Pluralizer::pluralize("user"), "users");
        assert_eq!(Pluralizer::pluralize("car"), "cars");
        assert_eq!(Pluralizer::pluralize("dog"), "dogs");
    }

    #[test]
    fn test_pluralize_y_ending() {
        assert_eq!(Pluralizer::pluralize("company"), "companies");
        assert_eq!(Pluralizer::pluralize("category"), "categories");
        assert_eq!(Pluralizer::pluralize("fly"), "flies");

        // Vowel + y = just add s
        assert_eq!(Pluralizer::pluralize("day"), "days");
        assert_eq!(Pluralizer::pluralize("key"), "keys");
        assert_eq!(Pluralizer::pluralize("KEY"), "KEYs");
        assert_eq!(Pluralizer::pluralize("kEy"), "kEys");
    }

    #[test]
    fn test_pluralize_single_y() {
        assert_eq!(Pluralizer::pluralize("y"), "ys");
    }

    #[test]
    fn test_pluralize_sibilants() {
        assert_eq!(Pluralizer::pluralize("address"), "addresses");
        assert_eq!(Pluralizer::pluralize("bus"), "buses");
        assert_eq!(Pluralizer::pluralize("box"), "boxes");
        assert_eq!(Pluralizer::pluralize("buzz"), "buzzes");
        assert_eq!(Pluralizer::pluralize("church"), "churches");
        assert_eq!(Pluralizer::pluralize("dish"), "dishes");
    }

    #[test]
    fn test_pluralize_f_endings() {
        assert_eq!(Pluralizer::pluralize("knife"), "knives");
        assert_eq!(Pluralizer::pluralize("life"), "lives");
        assert_eq!(Pluralizer::pluralize("wolf"), "wolves");
        assert_eq!(Pluralizer::pluralize("f"), "ves");
    }

    #[test]
    fn test_pluralize_o_endings() {
        assert_eq!(Pluralizer::pluralize("hero"), "heroes");
        assert_eq!(Pluralizer::pluralize("potato"), "potatoes");
        assert_eq!(Pluralizer::pluralize("photo"), "photoes");

        // Vowel + o = just add s
        assert_eq!(Pluralizer::pluralize("radio"), "radios");
        assert_eq!(Pluralizer::pluralize("o"), "os");
    }

    #[test]
    fn test_pluralize_exceptions() {
        assert_eq!(Pluralizer::pluralize("child"), "children");
        assert_eq!(Pluralizer::pluralize("person"), "people");
        assert_eq!(Pluralizer::pluralize("goose"), "geese");
        assert_eq!(Pluralizer::pluralize("Person"), "People");
        assert_eq!(Pluralizer::pluralize("PERSON"), "People");
        assert_eq!(Pluralizer::pluralize("mOUSE"), "mice");
    }

    #[test]
    fn test_pluralize_preserves_casing() {
        assert_eq!(Pluralizer::pluralize("UserProfile"), "UserProfiles");
        assert_eq!(Pluralizer::pluralize("BUS"), "BUSs");
        assert_eq!(Pluralizer::pluralize("Company"), "Companies");
    }

    #[test]
    fn test_singularize_regular() {
        assert_eq!(Pluralizer::singularize("users"), "user");
        assert_eq!(Pluralizer::singularize("cars"), "car");
        assert_eq!(Pluralizer::singularize("dogs"), "dog");
    }

    #[test]
    fn test_singularize_ies() {
        assert_eq!(Pluralizer::singularize("companies"), "company");
        assert_eq!(Pluralizer::singularize("categories"), "category");
        assert_eq!(Pluralizer::singularize("flies"), "fly");
        assert_eq!(Pluralizer::singularize("ies"), "ie");
    }

    #[test]
    fn test_singularize_sibilants() {
        assert_eq!(Pluralizer::singularize("addresses"), "address");
        assert_eq!(Pluralizer::singularize("buses"), "bus");
        assert_eq!(Pluralizer::singularize("boxes"), "box");
        assert_eq!(Pluralizer::singularize("buzzes"), "buzz");
        assert_eq!(Pluralizer::singularize("churches"), "church");
        assert_eq!(Pluralizer::singularize("dishes"), "dish");
        assert_eq!(Pluralizer::singularize("potatoes"), "potato");
    }

    #[test]
    fn test_singularize_plain_es() {
        assert_eq!(Pluralizer::singularize("names"), "name");
        assert_eq!(Pluralizer::singularize("es"), "e");
    }

    #[test]
    fn test_singularize_ves() {
        assert_eq!(Pluralizer::singularize("knives"), "knif");
        assert_eq!(Pluralizer::singularize("wolves"), "wolf");
    }

    #[test]
    fn test_singularize_exceptions() {
        assert_eq!(Pluralizer::singularize("children"), "child");
        assert_eq!(Pluralizer::singularize("People"), "Person");
        assert_eq!(Pluralizer::singularize("mice"), "mouse");
    }

    #[test]
    fn test_roundtrip() {
        let words = vec!["user", "company", "address", "box", "day", "bus", "child"];
        for word in words {
            let plural = Pluralizer::pluralize(word);
            let back_to_singular = Pluralizer::singularize(&plural);
            assert_eq!(word, back_to_singular, "Roundtrip failed for: {}", word);
        }
    }

    #[test]
    fn test_pluralize_empty_string() {
        assert_eq!(Pluralizer::pluralize(""), "");
    }

    #[test]
    fn test_singularize_empty_string() {
        assert_eq!(Pluralizer::singularize(""), "");
    }

    #[test]
    fn test_singularize_word_not_ending_in_s() {
        assert_eq!(Pluralizer::singularize("child"), "child");
        assert_eq!(Pluralizer::singularize("deer"), "deer");
        assert_eq!(Pluralizer::singularize("x"), "x");
        assert_eq!(Pluralizer::singularize("s"), "s");
    }

    #[test]
    fn test_non_ascii_words() {
        assert_eq!(Pluralizer::pluralize("café"), "cafés");
        assert_eq!(Pluralizer::singularize("cafés"), "café");
    }
}
