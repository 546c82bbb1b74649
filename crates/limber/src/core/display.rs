//! Display implementation for [`Value`].
//!
//! This is a debug dump, not a serializer: strings render raw (unquoted),
//! and non-finite numbers render the way `f64` does. Use
//! [`Json::to_json_string`](crate::Json::to_json_string) for JSON text.

use crate::core::value::Value;
use std::fmt;

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::Array(array) => write!(f, "{array}"),
            Value::Object(object) => {
                // Entry order carries no meaning; sort keys so the dump is
                // stable across runs.
                let mut entries: Vec<_> = object.entries().collect();
                entries.sort_by(|(a, _), (b, _)| a.cmp(b));

                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections::Object;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::boolean(true).to_string(), "true");
        assert_eq!(Value::number(42.0).to_string(), "42");
        assert_eq!(Value::number(9.99).to_string(), "9.99");
    }

    #[test]
    fn test_display_string_is_raw() {
        let val = Value::text("hello \"world\"");
        assert_eq!(val.to_string(), "hello \"world\"");
    }

    #[test]
    fn test_display_array_in_order() {
        let val = Value::from(vec![Value::number(1.0), Value::text("two")]);
        assert_eq!(val.to_string(), "[1, two]");
    }

    #[test]
    fn test_display_object_sorts_keys() {
        let object = Object::new()
            .insert("b", Value::number(2.0))
            .insert("a", Value::number(1.0));
        assert_eq!(Value::Object(object).to_string(), "{a: 1, b: 2}");
    }
}
