//! Internal error types for PDF handling.
//!
//! These carry more detail than `PdfError` from `pdfpick-core` and convert
//! into it at the port boundary.

use pdfpick_core::PdfError;

/// Internal errors that can occur while reading or writing a document.
#[derive(Debug)]
pub enum PdfInternalError {
    /// The source file does not exist.
    FileNotFound(String),

    /// `lopdf` could not load or navigate the document.
    Parse(lopdf::Error),

    /// A requested page number is outside the document.
    PageOutOfRange { page: u32, count: u32 },

    /// No pages were requested.
    EmptySelection,

    /// Writing the output document failed.
    Write(String),
}

impl std::fmt::Display for PdfInternalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileNotFound(path) => write!(f, "File not found: {path}"),
            Self::Parse(e) => write!(f, "Failed to read PDF: {e}"),
            Self::PageOutOfRange { page, count } => {
                write!(f, "Page {page} is out of range (document has {count} pages)")
            }
            Self::EmptySelection => write!(f, "No pages selected"),
            Self::Write(msg) => write!(f, "Failed to write PDF: {msg}"),
        }
    }
}

impl std::error::Error for PdfInternalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<lopdf::Error> for PdfInternalError {
    fn from(err: lopdf::Error) -> Self {
        Self::Parse(err)
    }
}

/// Convert internal errors to the domain-facing port error.
impl From<PdfInternalError> for PdfError {
    fn from(err: PdfInternalError) -> Self {
        match err {
            PdfInternalError::FileNotFound(path) => Self::NotFound(path),
            PdfInternalError::Parse(e) => Self::InvalidDocument(e.to_string()),
            PdfInternalError::PageOutOfRange { page, count } => {
                Self::PageOutOfRange { page, count }
            }
            PdfInternalError::EmptySelection => {
                Self::InvalidDocument("No pages selected".to_string())
            }
            PdfInternalError::Write(msg) => Self::Io(msg),
        }
    }
}

/// Result type for internal PDF operations.
pub type PdfResult<T> = Result<T, PdfInternalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_port_error() {
        let err: PdfError = PdfInternalError::FileNotFound("/x.pdf".to_string()).into();
        assert!(matches!(err, PdfError::NotFound(ref p) if p == "/x.pdf"));
    }

    #[test]
    fn test_out_of_range_keeps_numbers() {
        let err: PdfError = PdfInternalError::PageOutOfRange { page: 7, count: 2 }.into();
        assert!(matches!(err, PdfError::PageOutOfRange { page: 7, count: 2 }));
    }

    #[test]
    fn test_write_maps_to_io() {
        let err: PdfError = PdfInternalError::Write("disk full".to_string()).into();
        assert_eq!(err.to_string(), "IO error: disk full");
    }
}
