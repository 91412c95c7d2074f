//! Decode command handler.
//!
//! Runs the binding factory on JSON text, the same normalization the
//! front-end applies to every record it receives.

use std::io::{IsTerminal, Read};

use anyhow::Result;
use pdfpick_core::{BindingError, BindingSource, FileInfo, ProcessResult, Record};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::commands::RecordKind;
use crate::error::CliError;
use crate::presentation::print_json;

/// A normalized record and the declared fields it lacks.
#[derive(Debug, Serialize, PartialEq)]
pub struct DecodedRecord {
    pub record: Map<String, Value>,
    pub missing: Vec<&'static str>,
}

/// Build a record of `kind` from `source`.
pub fn decode(kind: RecordKind, source: BindingSource) -> Result<DecodedRecord, BindingError> {
    match kind {
        RecordKind::FileInfo => decode_as::<FileInfo>(source),
        RecordKind::ProcessResult => decode_as::<ProcessResult>(source),
    }
}

fn decode_as<R: Record>(source: BindingSource) -> Result<DecodedRecord, BindingError> {
    let record = R::create_from(source)?;
    Ok(DecodedRecord {
        record: record.to_mapping(),
        missing: record.missing_fields(),
    })
}

/// Execute the decode command.
///
/// Without an argument the input comes from stdin; an interactive or empty
/// stdin counts as absent input.
pub fn execute(kind: RecordKind, input: Option<String>) -> Result<()> {
    let source = match input {
        Some(text) => BindingSource::Text(text),
        None => read_stdin()?,
    };

    let decoded = decode(kind, source).map_err(CliError::from)?;
    print_json(&decoded)?;
    Ok(())
}

fn read_stdin() -> Result<BindingSource, CliError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(BindingSource::Absent);
    }
    read_source(stdin)
}

/// Read all of `reader`; blank input counts as absent.
fn read_source<R: Read>(mut reader: R) -> Result<BindingSource, CliError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    if text.trim().is_empty() {
        Ok(BindingSource::Absent)
    } else {
        Ok(BindingSource::Text(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_decode_file_info() {
        let text = r#"{"name":"report.pdf","path":"/docs/report.pdf","pages":12}"#;
        let decoded = decode(RecordKind::FileInfo, BindingSource::from(text)).unwrap();
        assert!(decoded.missing.is_empty());
        assert_eq!(decoded.record.get("pages"), Some(&Value::from(12)));
    }

    #[test]
    fn test_decode_absent_process_result() {
        let decoded = decode(RecordKind::ProcessResult, BindingSource::Absent).unwrap();
        assert!(decoded.record.is_empty());
        assert_eq!(decoded.missing, vec!["file", "success", "message"]);
    }

    #[test]
    fn test_decode_malformed_text() {
        let result = decode(RecordKind::FileInfo, BindingSource::from("{not json"));
        assert!(matches!(result, Err(BindingError::Parse(_))));
    }

    #[test]
    fn test_empty_input_is_absent() {
        let source = read_source(Cursor::new("")).unwrap();
        assert_eq!(source, BindingSource::Absent);
        let source = read_source(Cursor::new("  \n\t ")).unwrap();
        assert_eq!(source, BindingSource::Absent);
    }

    #[test]
    fn test_non_empty_input_is_text() {
        let source = read_source(Cursor::new("{\"file\":\"a.pdf\"}\n")).unwrap();
        assert_eq!(source, BindingSource::Text("{\"file\":\"a.pdf\"}\n".to_string()));
    }

    #[test]
    fn test_invalid_utf8_input_is_io_error() {
        let err = read_source(Cursor::new(vec![0xff, 0xfe])).unwrap_err();
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_execute_reports_parse_failure_as_input_error() {
        let err = execute(RecordKind::FileInfo, Some("{not json".to_string())).unwrap_err();
        let cli = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli.exit_code(), 2);
    }
}
