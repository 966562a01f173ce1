//! Built-in filter implementations
//!
//! Every filter accepts any host value. Values of the wrong shape never
//! produce an error; each filter falls back to its own empty result.

use super::{FilterArgs, FilterEntry, FilterGroup};
use crate::core::case::CasePolicy;
use crate::core::pluralize::Pluralizer;
use crate::core::value::HostValue;

/// The full filter table, canonical name first then aliases
pub const BUILTINS: &[FilterEntry] = &[
    // Case conversion
    FilterEntry::new("camelcase", &["camelCase"], FilterGroup::Case, camel_case),
    FilterEntry::new("pascalcase", &["pascalCase", "PascalCase"], FilterGroup::Case, pascal_case),
    FilterEntry::new("snakecase", &["snakeCase", "snake_case"], FilterGroup::Case, snake_case),
    FilterEntry::new("kebabcase", &["kebabCase", "kebab-case"], FilterGroup::Case, kebab_case),
    FilterEntry::new("constantcase", &["CONSTANT_CASE"], FilterGroup::ExtendedCase, constant_case),
    FilterEntry::new("dotcase", &["dotCase"], FilterGroup::ExtendedCase, dot_case),
    FilterEntry::new("pathcase", &["pathCase"], FilterGroup::ExtendedCase, path_case),
    FilterEntry::new("sentencecase", &["sentenceCase"], FilterGroup::ExtendedCase, sentence_case),
    FilterEntry::new("headercase", &["headerCase"], FilterGroup::ExtendedCase, header_case),
    // Text
    FilterEntry::new("uppercase", &[], FilterGroup::Text, uppercase),
    FilterEntry::new("lowercase", &[], FilterGroup::Text, lowercase),
    FilterEntry::new("capitalize", &[], FilterGroup::Text, title_case),
    FilterEntry::new("capitalizeFirst", &["capitalizedFirst"], FilterGroup::Text, capitalize_first),
    FilterEntry::new("titlecase", &["titleCase"], FilterGroup::Text, title_case),
    FilterEntry::new("isAcronym", &[], FilterGroup::Text, is_acronym),
    // Inflection
    FilterEntry::new("pluralize", &[], FilterGroup::Inflection, pluralize),
    FilterEntry::new("singularize", &[], FilterGroup::Inflection, singularize),
    // Collections
    FilterEntry::new("count", &[], FilterGroup::Collection, count),
    FilterEntry::new("isEmpty", &[], FilterGroup::Collection, is_empty),
    FilterEntry::new("isNotEmpty", &[], FilterGroup::Collection, is_not_empty),
    FilterEntry::new("first", &[], FilterGroup::Collection, first),
    FilterEntry::new("last", &[], FilterGroup::Collection, last),
    FilterEntry::new("join", &[], FilterGroup::Collection, join).with_params(&["sep"]),
    FilterEntry::new("split", &[], FilterGroup::Collection, split).with_params(&["pat"]),
];

fn map_string(value: &HostValue, f: impl FnOnce(&str) -> String) -> HostValue {
    HostValue::String(value.as_string().map(f).unwrap_or_default())
}

fn convert(value: &HostValue, policy: CasePolicy) -> HostValue {
    map_string(value, |s| policy.convert(s))
}

pub fn camel_case(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    convert(value, CasePolicy::Camel)
}

pub fn pascal_case(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    convert(value, CasePolicy::Pascal)
}

pub fn snake_case(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    convert(value, CasePolicy::Snake)
}

pub fn kebab_case(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    convert(value, CasePolicy::Kebab)
}

pub fn constant_case(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    convert(value, CasePolicy::Constant)
}

pub fn dot_case(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    convert(value, CasePolicy::Dot)
}

pub fn path_case(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    convert(value, CasePolicy::Path)
}

pub fn sentence_case(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    convert(value, CasePolicy::Sentence)
}

pub fn header_case(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    convert(value, CasePolicy::Header)
}

pub fn uppercase(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    map_string(value, str::to_uppercase)
}

pub fn lowercase(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    map_string(value, str::to_lowercase)
}

/// Uppercase the first letter of every whitespace-separated word and
/// lowercase the rest
pub fn title_case(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    map_string(value, |s| {
        let mut out = String::with_capacity(s.len());
        let mut word_start = true;
        for c in s.chars() {
            if c.is_whitespace() {
                out.push(c);
                word_start = true;
            } else if word_start {
                out.extend(c.to_uppercase());
                word_start = false;
            } else {
                out.extend(c.to_lowercase());
            }
        }
        out
    })
}

/// Uppercase only the first character, leaving the rest untouched
pub fn capitalize_first(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    map_string(value, |s| {
        let mut chars = s.chars();
        match chars.next() {
            Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    })
}

pub fn is_acronym(value: &HostValue, args: &FilterArgs<'_>) -> HostValue {
    let acronym = value.as_string().is_some_and(|s| {
        s.to_uppercase() == s && s.chars().count() <= args.options.acronym_max_len
    });
    HostValue::Boolean(acronym)
}

pub fn pluralize(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    map_string(value, Pluralizer::pluralize)
}

pub fn singularize(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    map_string(value, Pluralizer::singularize)
}

pub fn count(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    match value {
        HostValue::Sequence(items) => HostValue::from(items.len()),
        HostValue::String(s) => HostValue::from(s.chars().count()),
        _ => HostValue::Integer(0),
    }
}

fn empty(value: &HostValue) -> bool {
    match value {
        HostValue::Sequence(items) => items.is_empty(),
        HostValue::String(s) => s.is_empty(),
        _ => true,
    }
}

pub fn is_empty(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    HostValue::Boolean(empty(value))
}

pub fn is_not_empty(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    HostValue::Boolean(!empty(value))
}

pub fn first(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    match value {
        HostValue::Sequence(items) => items.first().cloned().unwrap_or_default(),
        HostValue::String(s) => s.chars().next().map_or(HostValue::Null, |c| c.to_string().into()),
        _ => HostValue::Null,
    }
}

pub fn last(value: &HostValue, _: &FilterArgs<'_>) -> HostValue {
    match value {
        HostValue::Sequence(items) => items.last().cloned().unwrap_or_default(),
        HostValue::String(s) => s.chars().last().map_or(HostValue::Null, |c| c.to_string().into()),
        _ => HostValue::Null,
    }
}

pub fn join(value: &HostValue, args: &FilterArgs<'_>) -> HostValue {
    let Some(items) = value.as_sequence() else {
        return HostValue::String(String::new());
    };
    let sep = args.string(0).unwrap_or("");
    let joined = items
        .iter()
        .map(HostValue::render)
        .collect::<Vec<_>>()
        .join(sep);
    HostValue::String(joined)
}

pub fn split(value: &HostValue, args: &FilterArgs<'_>) -> HostValue {
    let Some(s) = value.as_string() else {
        return HostValue::Sequence(Vec::new());
    };
    match args.string(0) {
        Some(pat) if !pat.is_empty() => HostValue::from(s.split(pat).collect::<Vec<_>>()),
        _ => HostValue::from(vec![s]),
    }
}
