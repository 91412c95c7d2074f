//! `lopdf`-backed implementation of the pdfpick PDF port.
//!
//! Counts pages and writes page subsets of existing documents. Only the
//! backend type is public; everything else converts into core types.

#![deny(unused_crate_dependencies)]

mod backend;
mod error;
mod pages;

#[cfg(test)]
mod test_support;

// =============================================================================
// Public API: Backend + Core Re-exports (minimal surface)
// =============================================================================

/// The `lopdf` document backend.
pub use backend::LopdfBackend;

// Re-export port and error from core for convenience
pub use pdfpick_core::{PdfDocumentPort, PdfError};
