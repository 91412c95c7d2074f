//! Lenient field accessors over a structured mapping.

use serde_json::{Map, Value};

pub fn read_text(mapping: &Map<String, Value>, key: &str) -> Option<String> {
    mapping.get(key).and_then(Value::as_str).map(str::to_owned)
}

pub fn read_integer(mapping: &Map<String, Value>, key: &str) -> Option<i64> {
    mapping.get(key).and_then(Value::as_i64)
}

pub fn read_bool(mapping: &Map<String, Value>, key: &str) -> Option<bool> {
    mapping.get(key).and_then(Value::as_bool)
}

/// Insert `value` under `key` unless it is absent.
pub fn write_field<T: Into<Value>>(mapping: &mut Map<String, Value>, key: &str, value: Option<T>) {
    if let Some(value) = value {
        mapping.insert(key.to_owned(), value.into());
    }
}
