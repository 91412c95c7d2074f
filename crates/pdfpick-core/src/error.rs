//! Aggregate error type for core operations.

use thiserror::Error;

use crate::binding::BindingError;
use crate::pages::PageRangeError;
use crate::ports::PdfError;
use crate::settings::SettingsError;

/// Errors surfaced by core operations to adapters.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Binding input could not be decoded.
    #[error(transparent)]
    Binding(#[from] BindingError),

    /// Page range text was invalid.
    #[error(transparent)]
    PageRange(#[from] PageRangeError),

    /// PDF backend failure.
    #[error(transparent)]
    Pdf(#[from] PdfError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// Filesystem error outside the PDF backend.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
