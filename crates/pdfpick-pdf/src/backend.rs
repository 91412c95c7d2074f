//! Port implementation.

use std::path::Path;

use pdfpick_core::{PdfDocumentPort, PdfError};

use crate::error::PdfInternalError;
use crate::pages::{load, page_count, retain_pages};

/// PDF backend built on `lopdf`.
///
/// Stateless: every call loads the source document from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

impl LopdfBackend {
    pub const fn new() -> Self {
        Self
    }
}

impl PdfDocumentPort for LopdfBackend {
    fn page_count(&self, path: &Path) -> Result<u32, PdfError> {
        let doc = load(path)?;
        Ok(page_count(&doc))
    }

    fn extract_pages(&self, source: &Path, pages: &[u32], dest: &Path) -> Result<(), PdfError> {
        let mut doc = load(source)?;
        retain_pages(&mut doc, pages)?;
        doc.save(dest)
            .map_err(|e| PdfInternalError::Write(e.to_string()))?;
        tracing::debug!(
            source = %source.display(),
            dest = %dest.display(),
            pages = pages.len(),
            "Wrote extracted pages"
        );
        Ok(())
    }
}
