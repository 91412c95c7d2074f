//! Services producing the records handed to the front-end.
//!
//! Services depend only on ports; adapters inject the concrete PDF backend.

mod pdf_service;

pub use pdf_service::PdfService;
