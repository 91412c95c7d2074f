//! File descriptor record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::binding::{BindingError, Record, read_integer, read_text, write_field};

/// A file selected by the user, as shown in the front-end.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct FileInfo {
    /// Display name (final path component).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Absolute location on disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Number of pages in the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<i64>,
}

impl FileInfo {
    /// Create a fully-populated descriptor.
    pub fn new(name: impl Into<String>, path: impl Into<String>, pages: i64) -> Self {
        Self {
            name: Some(name.into()),
            path: Some(path.into()),
            pages: Some(pages),
        }
    }
}

impl Record for FileInfo {
    const FIELDS: &'static [&'static str] = &["name", "path", "pages"];

    fn from_mapping(mapping: &Map<String, Value>) -> Self {
        Self {
            name: read_text(mapping, "name"),
            path: read_text(mapping, "path"),
            pages: read_integer(mapping, "pages"),
        }
    }

    fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        write_field(&mut mapping, "name", self.name.clone());
        write_field(&mut mapping, "path", self.path.clone());
        write_field(&mut mapping, "pages", self.pages);
        mapping
    }
}

impl TryFrom<Value> for FileInfo {
    type Error = BindingError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::create_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_wire_shape() {
        let info = FileInfo::new("report.pdf", "/docs/report.pdf", 12);
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(
            value,
            json!({"name": "report.pdf", "path": "/docs/report.pdf", "pages": 12})
        );
    }

    #[test]
    fn test_deserialize_is_lenient() {
        let info: FileInfo = serde_json::from_str(r#"{"name":"a.pdf","pages":"many"}"#).unwrap();
        assert_eq!(info.name.as_deref(), Some("a.pdf"));
        assert_eq!(info.pages, None);
    }

    #[test]
    fn test_deserialize_list() {
        let list: Vec<FileInfo> =
            serde_json::from_str(r#"[{"name":"a.pdf"},{"name":"b.pdf","pages":3}]"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].pages, Some(3));
    }
}
