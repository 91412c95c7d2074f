//! Processing outcome record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::binding::{BindingError, Record, read_bool, read_text, write_field};

/// Outcome of processing one file (or one page of it).
///
/// `message` is free text and is not checked against `success`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct ProcessResult {
    /// Display name of the source file; empty when no file was involved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Whether the operation completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,

    /// Human-readable detail, such as the output file name or the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProcessResult {
    /// Create a successful outcome.
    pub fn succeeded(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            success: Some(true),
            message: Some(message.into()),
        }
    }

    /// Create a failed outcome.
    pub fn failed(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file: Some(file.into()),
            success: Some(false),
            message: Some(message.into()),
        }
    }

    /// True only when `success` is present and set.
    pub fn is_success(&self) -> bool {
        self.success == Some(true)
    }
}

impl Record for ProcessResult {
    const FIELDS: &'static [&'static str] = &["file", "success", "message"];

    fn from_mapping(mapping: &Map<String, Value>) -> Self {
        Self {
            file: read_text(mapping, "file"),
            success: read_bool(mapping, "success"),
            message: read_text(mapping, "message"),
        }
    }

    fn to_mapping(&self) -> Map<String, Value> {
        let mut mapping = Map::new();
        write_field(&mut mapping, "file", self.file.clone());
        write_field(&mut mapping, "success", self.success);
        write_field(&mut mapping, "message", self.message.clone());
        mapping
    }
}

impl TryFrom<Value> for ProcessResult {
    type Error = BindingError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::create_from(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let ok = ProcessResult::succeeded("a.pdf", "Saved to: a_p1-2.pdf");
        assert!(ok.is_success());
        assert!(ok.is_complete());

        let err = ProcessResult::failed("a.pdf", "boom");
        assert!(!err.is_success());
        assert_eq!(err.message.as_deref(), Some("boom"));
    }

    #[test]
    fn test_absent_success_is_not_success() {
        assert!(!ProcessResult::default().is_success());
    }

    #[test]
    fn test_serialize_round_trips_through_binding() {
        let original = ProcessResult::failed("a.txt", "timeout");
        let text = serde_json::to_string(&original).unwrap();
        assert_eq!(text, r#"{"file":"a.txt","success":false,"message":"timeout"}"#);
        assert_eq!(ProcessResult::create_from(text).unwrap(), original);
    }
}
