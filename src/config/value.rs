//! Parsed configuration values.
//!
//! YAML is parsed by `serde_yaml` and then lowered into [`ConfigValue`], a
//! closed sum type in which booleans, integers and floats are distinct
//! variants. Rules can therefore ask "is this an integer and not a boolean"
//! without any coercion.

use indexmap::IndexMap;

/// Mapping node: string keys in document order.
pub type Mapping = IndexMap<String, ConfigValue>;

/// A node of a parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// Explicit `null` / `~` / empty value.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// Any YAML integer; `i128` holds the full `i64` and `u64` ranges.
    Integer(i128),
    /// Floating point number.
    Float(f64),
    /// String scalar.
    String(String),
    /// Sequence node.
    Sequence(Vec<ConfigValue>),
    /// Mapping node.
    Mapping(Mapping),
}

impl ConfigValue {
    /// Returns the mapping if this is a mapping node.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the integer if this is an integer node. Booleans are not
    /// integers.
    #[must_use]
    pub const fn as_integer(&self) -> Option<i128> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean if this is a boolean node.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string slice if this is a string node.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the elements if this is a sequence node.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Short name of the node kind, used in log output.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Mapping(_) => "mapping",
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Integer(i128::from(value))
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<serde_yaml::Value> for ConfigValue {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map(i128::from)
                .or_else(|| n.as_u64().map(i128::from))
                .map_or_else(|| Self::Float(n.as_f64().unwrap_or(f64::NAN)), Self::Integer),
            Value::String(s) => Self::String(s),
            Value::Sequence(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Mapping(map) => Self::Mapping(
                map.into_iter()
                    .filter_map(|(key, value)| mapping_key(key).map(|k| (k, Self::from(value))))
                    .collect(),
            ),
            // Tags carry no meaning for the plugin's loader; validate the
            // tagged value itself.
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

/// Renders a scalar YAML key as a string. Non-scalar keys cannot name a
/// section or field and are dropped.
fn mapping_key(key: serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;

    match key {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some("null".to_string()),
        Value::Tagged(tagged) => mapping_key(tagged.value),
        Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> ConfigValue {
        ConfigValue::from(serde_yaml::from_str::<serde_yaml::Value>(yaml).unwrap())
    }

    #[test]
    fn test_booleans_are_not_integers() {
        let value = parse("true");
        assert_eq!(value, ConfigValue::Bool(true));
        assert_eq!(value.as_integer(), None);
    }

    #[test]
    fn test_integer_and_float_are_distinct() {
        assert_eq!(parse("5"), ConfigValue::Integer(5));
        assert_eq!(parse("5.0"), ConfigValue::Float(5.0));
        assert_eq!(parse("5.0").as_integer(), None);
    }

    #[test]
    fn test_large_unsigned_integer_is_exact() {
        let value = parse("18446744073709551615");
        assert_eq!(value.as_integer(), Some(i128::from(u64::MAX)));
    }

    #[test]
    fn test_integer_beyond_u64_is_float() {
        let value = parse("18446744073709551616");
        assert!(matches!(value, ConfigValue::Float(_)));
        assert_eq!(value.as_integer(), None);
    }

    #[test]
    fn test_quoted_number_is_string() {
        assert_eq!(parse("\"10\""), ConfigValue::String("10".to_string()));
    }

    #[test]
    fn test_mapping_preserves_order() {
        let value = parse("b: 1\na: 2\nc: 3");
        let keys: Vec<_> = value.as_mapping().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_scalar_keys_are_stringified() {
        let value = parse("1: one\ntrue: yes");
        let map = value.as_mapping().unwrap();
        assert!(map.contains_key("1"));
        assert!(map.contains_key("true"));
    }

    #[test]
    fn test_empty_value_is_null() {
        let value = parse("plugin:");
        assert_eq!(value.as_mapping().unwrap()["plugin"], ConfigValue::Null);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(parse("[1, 2]").kind(), "sequence");
        assert_eq!(parse("{}").kind(), "mapping");
        assert_eq!(parse("~").kind(), "null");
    }
}
