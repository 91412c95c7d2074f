//! Core domain for pdfpick.
//!
//! Holds the records exchanged with the front-end (`FileInfo`,
//! `ProcessResult`), the data-binding shim that builds them from
//! structured or textual JSON, page-range parsing, output naming,
//! settings, the PDF port and the services driving it.
//!
//! PDF libraries live in adapter crates; nothing here depends on one.

#![deny(unused_crate_dependencies)]

pub mod binding;
pub mod domain;
pub mod error;
pub mod naming;
pub mod pages;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use binding::{BindingError, BindingSource, Record};
pub use domain::{FileInfo, ProcessResult};
pub use error::CoreError;
pub use pages::{PageRangeError, PageSelection, parse_page_range};
pub use ports::{PdfDocumentPort, PdfError};
pub use services::PdfService;
pub use settings::{
    DEFAULT_OUTPUT_DIR_NAME, DEFAULT_PAGE_COUNT, Settings, SettingsError, validate_settings,
};
