//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No PDF library types in any signature
//! - Implementations live in adapter crates (`pdfpick-pdf`)

pub mod pdf;

pub use pdf::{PdfDocumentPort, PdfError};

#[cfg(test)]
pub use pdf::MockPdfDocumentPort;
