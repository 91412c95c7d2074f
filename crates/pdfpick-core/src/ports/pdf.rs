//! PDF document port definition.
//!
//! This port abstracts reading page counts from PDF files and writing
//! page subsets to new files, so services can be exercised without a
//! real PDF library.
//!
//! # Design
//!
//! - This port only defines the trait and error type
//! - Implementations live in the `pdfpick-pdf` crate

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while reading or writing PDF documents.
///
/// This is the domain-facing error type. Implementations may have richer
/// internal errors that convert to this type via `From`.
#[derive(Debug, Error)]
pub enum PdfError {
    /// The file does not exist.
    #[error("File not found: {0}")]
    NotFound(String),

    /// The file is not a readable PDF document.
    #[error("Invalid PDF document: {0}")]
    InvalidDocument(String),

    /// A requested page is outside the document.
    #[error("Page {page} is out of range (document has {count} pages)")]
    PageOutOfRange { page: u32, count: u32 },

    /// IO error while reading or writing.
    #[error("IO error: {0}")]
    Io(String),
}

/// Port for PDF page operations.
#[cfg_attr(test, mockall::automock)]
pub trait PdfDocumentPort: Send + Sync {
    /// Count the pages of the PDF at `path`.
    fn page_count(&self, path: &Path) -> Result<u32, PdfError>;

    /// Write a new PDF at `dest` holding `pages` (1-based) of `source`.
    ///
    /// Pages keep their document order in the output.
    fn extract_pages(&self, source: &Path, pages: &[u32], dest: &Path) -> Result<(), PdfError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = PdfError::PageOutOfRange { page: 9, count: 4 };
        assert_eq!(
            err.to_string(),
            "Page 9 is out of range (document has 4 pages)"
        );
    }

    #[test]
    fn test_mock_port_is_object_safe() {
        let mut mock = MockPdfDocumentPort::new();
        mock.expect_page_count().returning(|_| Ok(3));
        let port: &dyn PdfDocumentPort = &mock;
        assert_eq!(port.page_count(Path::new("/a.pdf")).unwrap(), 3);
    }
}
