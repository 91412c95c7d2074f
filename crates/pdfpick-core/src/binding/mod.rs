//! Data binding between the front-end wire shape and domain records.
//!
//! Every record handed to the front-end can be rebuilt from one of three
//! inputs: an already-structured JSON mapping, the textual JSON encoding of
//! such a mapping, or nothing at all. [`Record::create_from`] is the single
//! factory that accepts all three.
//!
//! Field extraction never fails. A key that is missing, or that holds a
//! value of the wrong kind, leaves the field as `None`. The only failure is
//! textual input that is not valid JSON.
//!
//! # Example
//!
//! ```rust
//! use pdfpick_core::{FileInfo, Record};
//!
//! let info = FileInfo::create_from(r#"{"name":"report.pdf","pages":12}"#).unwrap();
//! assert_eq!(info.name.as_deref(), Some("report.pdf"));
//! assert_eq!(info.pages, Some(12));
//! assert_eq!(info.missing_fields(), vec!["path"]);
//! ```

mod fields;
mod source;

use serde_json::{Map, Value};
use thiserror::Error;

pub use source::BindingSource;

pub(crate) use fields::{read_bool, read_integer, read_text, write_field};

/// Errors raised while normalizing binding input.
#[derive(Debug, Error)]
pub enum BindingError {
    /// Textual input was not valid JSON.
    #[error("Failed to parse binding input: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A fixed-shape record exchanged with the front-end.
///
/// Implementors declare their wire field names and how to read/write them
/// from a structured mapping; the factory and the presence check come for free.
pub trait Record: Sized {
    /// Wire names of the declared fields, in declaration order.
    const FIELDS: &'static [&'static str];

    /// Build a record by reading each declared field from `mapping`.
    fn from_mapping(mapping: &Map<String, Value>) -> Self;

    /// Convert the record back into a structured mapping.
    ///
    /// Absent fields are omitted rather than written as `null`.
    fn to_mapping(&self) -> Map<String, Value>;

    /// Normalize `source` into a record.
    ///
    /// Structured input is read directly, textual input is decoded first and
    /// absent input behaves like an empty mapping.
    fn create_from<S: Into<BindingSource>>(source: S) -> Result<Self, BindingError> {
        let mapping = source.into().into_mapping()?;
        Ok(Self::from_mapping(&mapping))
    }

    /// Declared fields that are currently absent.
    fn missing_fields(&self) -> Vec<&'static str> {
        let mapping = self.to_mapping();
        Self::FIELDS
            .iter()
            .copied()
            .filter(|field| !mapping.contains_key(*field))
            .collect()
    }

    /// True when every declared field is present.
    fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
