//! Tera integration
//!
//! Exposes a [`FilterRegistry`] as Tera filters. Named template arguments are
//! mapped onto the entry's declared params, so `{{ items | join(sep=", ") }}`
//! calls `join` with `", "` as its first argument.

use super::{FilterArgs, FilterRegistry};
use crate::core::error::Result;
use crate::core::value::HostValue;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

/// Register the process-wide registry on `tera`
pub fn register(tera: &mut Tera) {
    register_with(tera, FilterRegistry::global());
}

/// Register every name of `registry` on `tera`
///
/// Registered names replace Tera built-ins of the same name (`first`,
/// `last`, `join`, `split`, `capitalize`).
pub fn register_with(tera: &mut Tera, registry: &FilterRegistry) {
    let options = registry.options();

    for (name, entry) in registry.entries() {
        let entry = *entry;
        tera.register_filter(
            name,
            move |value: &Value, args: &HashMap<String, Value>| -> tera::Result<Value> {
                let positional: Vec<HostValue> = entry
                    .params
                    .iter()
                    .map(|param| args.get(*param).map(HostValue::from).unwrap_or_default())
                    .collect();
                let out = (entry.func)(&HostValue::from(value), &FilterArgs::new(&positional, &options));
                Ok(Value::from(out))
            },
        );
    }

    tracing::debug!(filters = registry.len(), "registered filters on tera");
}

/// A fresh Tera instance with the process-wide filters
pub fn engine() -> Tera {
    let mut tera = Tera::default();
    register(&mut tera);
    tera
}

/// Render a one-off template with the process-wide filters
pub fn render_str(template: &str, context: &Context) -> Result<String> {
    Ok(engine().render_str(template, context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{KitConfig, Profile};

    fn render(template: &str, key: &str, value: impl serde::Serialize) -> String {
        let mut context = Context::new();
        context.insert(key, &value);
        render_str(template, &context).unwrap()
    }

    #[test]
    fn test_case_filters_render() {
        assert_eq!(render("{{ input | camelcase }}", "input", "user_profile_id"), "userProfileId");
        assert_eq!(render("{{ input | pascalcase }}", "input", "user-profile-id"), "UserProfileId");
        assert_eq!(render("{{ input | snakecase }}", "input", "UserProfileId"), "user_profile_id");
        assert_eq!(render("{{ input | kebabcase }}", "input", "user profile ID"), "user-profile-id");
    }

    #[test]
    fn test_overrides_tera_builtins() {
        assert_eq!(render("{{ text | first }}", "text", "hello"), "h");
        assert_eq!(render("{{ text | last }}", "text", "hello"), "o");
        assert_eq!(render("{{ name | capitalize }}", "name", "hello world"), "Hello World");
    }

    #[test]
    fn test_named_arguments() {
        assert_eq!(render(r#"{{ items | join(sep=", ") }}"#, "items", ["a", "b", "c"]), "a, b, c");
        assert_eq!(render(r#"{{ text | split(pat="-") | first }}"#, "text", "a-b-c"), "a");
    }

    #[test]
    fn test_minimal_registry_omits_extended_filters() {
        let registry = FilterRegistry::from_config(&KitConfig {
            profile: Profile::Minimal,
            ..KitConfig::default()
        })
        .unwrap();
        let mut tera = Tera::default();
        register_with(&mut tera, &registry);

        let mut context = Context::new();
        context.insert("input", "myAppName");
        assert_eq!(tera.render_str("{{ input | snakeCase }}", &context).unwrap(), "my_app_name");
        assert!(tera.render_str("{{ input | dotcase }}", &context).is_err());
    }

    #[test]
    fn test_render_error_is_wrapped() {
        let err = render_str("{{ input | nosuchfilter }}", &Context::new()).unwrap_err();
        assert_eq!(err.error_code(), "RENDER_ERROR");
    }
}
