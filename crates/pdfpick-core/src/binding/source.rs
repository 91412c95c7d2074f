//! Input accepted by the binding factory.

use serde_json::{Map, Value};

use super::BindingError;

/// The three shapes binding input can take.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum BindingSource {
    /// An already-structured mapping from field name to value.
    Mapping(Map<String, Value>),
    /// A textual JSON encoding of a mapping.
    Text(String),
    /// No input; treated as an empty mapping.
    #[default]
    Absent,
}

impl BindingSource {
    /// Resolve the input into a structured mapping.
    ///
    /// Text that decodes to something other than an object carries no named
    /// fields and resolves to an empty mapping.
    pub fn into_mapping(self) -> Result<Map<String, Value>, BindingError> {
        match self {
            Self::Mapping(mapping) => Ok(mapping),
            Self::Text(text) => match serde_json::from_str::<Value>(&text)? {
                Value::Object(mapping) => Ok(mapping),
                _ => Ok(Map::new()),
            },
            Self::Absent => Ok(Map::new()),
        }
    }
}

impl From<Map<String, Value>> for BindingSource {
    fn from(mapping: Map<String, Value>) -> Self {
        Self::Mapping(mapping)
    }
}

/// A JSON string is textual input; objects are mappings and `null` is absent.
/// Any other value has no named fields.
impl From<Value> for BindingSource {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mapping) => Self::Mapping(mapping),
            Value::String(text) => Self::Text(text),
            Value::Null => Self::Absent,
            Value::Bool(_) | Value::Number(_) | Value::Array(_) => Self::Mapping(Map::new()),
        }
    }
}

impl From<String> for BindingSource {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for BindingSource {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<()> for BindingSource {
    fn from((): ()) -> Self {
        Self::Absent
    }
}

impl<T: Into<BindingSource>> From<Option<T>> for BindingSource {
    fn from(source: Option<T>) -> Self {
        source.map_or(Self::Absent, Into::into)
    }
}
