//! Host values passed through the filter layer

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// A value handed to a filter by the template host
///
/// Filters take whatever the template engine gives them and use
/// [`HostValue::as_string`] / [`HostValue::as_sequence`] to decide whether
/// they have something to work with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HostValue {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<HostValue>),
    Map(BTreeMap<String, HostValue>),
}

impl HostValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            HostValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a sequence if possible
    pub fn as_sequence(&self) -> Option<&[HostValue]> {
        match self {
            HostValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get the value as a boolean if possible
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, HostValue::Null)
    }

    /// Textual form, as a template would print it
    pub fn render(&self) -> String {
        match self {
            HostValue::Null => String::new(),
            HostValue::Boolean(b) => b.to_string(),
            HostValue::Integer(i) => i.to_string(),
            HostValue::Float(f) => f.to_string(),
            HostValue::String(s) => s.clone(),
            HostValue::Sequence(_) | HostValue::Map(_) => Value::from(self.clone()).to_string(),
        }
    }
}

impl From<&str> for HostValue {
    fn from(s: &str) -> Self {
        HostValue::String(s.to_string())
    }
}

impl From<String> for HostValue {
    fn from(s: String) -> Self {
        HostValue::String(s)
    }
}

impl From<bool> for HostValue {
    fn from(b: bool) -> Self {
        HostValue::Boolean(b)
    }
}

impl From<i64> for HostValue {
    fn from(i: i64) -> Self {
        HostValue::Integer(i)
    }
}

impl From<usize> for HostValue {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(HostValue::Float(n as f64), HostValue::Integer)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(items: Vec<T>) -> Self {
        HostValue::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl From<&Value> for HostValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => HostValue::Null,
            Value::Bool(b) => HostValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => HostValue::Integer(i),
                None => HostValue::Float(n.as_f64().unwrap_or_default()),
            },
            Value::String(s) => HostValue::String(s.clone()),
            Value::Array(items) => HostValue::Sequence(items.iter().map(HostValue::from).collect()),
            Value::Object(map) => HostValue::Map(
                map.iter()
                    .map(|(k, v)| (k.clone(), HostValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<HostValue> for Value {
    fn from(value: HostValue) -> Self {
        match value {
            HostValue::Null => Value::Null,
            HostValue::Boolean(b) => Value::Bool(b),
            HostValue::Integer(i) => Value::Number(i.into()),
            HostValue::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            HostValue::String(s) => Value::String(s),
            HostValue::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            HostValue::Map(map) => Value::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_host_value_string() {
        let value = HostValue::from("test");
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_sequence(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_host_value_sequence() {
        let value = HostValue::from(vec!["a", "b"]);
        assert_eq!(value.as_sequence().map(|s| s.len()), Some(2));
        assert_eq!(value.as_string(), None);
    }

    #[test]
    fn test_from_json() {
        let value = HostValue::from(&json!({"n": 3, "f": 1.5, "ok": true, "list": ["x"]}));
        let HostValue::Map(map) = value else {
            panic!("expected a map");
        };
        assert_eq!(map["n"], HostValue::Integer(3));
        assert_eq!(map["f"], HostValue::Float(1.5));
        assert_eq!(map["ok"], HostValue::Boolean(true));
        assert_eq!(map["list"], HostValue::from(vec!["x"]));
    }

    #[test]
    fn test_into_json() {
        let value = HostValue::from(vec![HostValue::from(1_i64), HostValue::Null]);
        assert_eq!(Value::from(value), json!([1, null]));
        assert_eq!(Value::from(HostValue::Float(f64::NAN)), Value::Null);
    }

    #[test]
    fn test_render() {
        assert_eq!(HostValue::Null.render(), "");
        assert_eq!(HostValue::from(true).render(), "true");
        assert_eq!(HostValue::from(42_i64).render(), "42");
        assert_eq!(HostValue::from("x").render(), "x");
        assert_eq!(HostValue::from(vec!["a"]).render(), r#"["a"]"#);
    }

    #[test]
    fn test_untagged_deserialize() {
        let value: HostValue = serde_json::from_str(r#"["a", 1, null]"#).unwrap();
        assert_eq!(
            value,
            HostValue::Sequence(vec![
                HostValue::from("a"),
                HostValue::Integer(1),
                HostValue::Null
            ])
        );
    }
}
