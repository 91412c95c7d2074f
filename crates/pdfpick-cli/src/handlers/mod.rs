//! Command handlers that delegate to the core service.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<...>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `PdfService` or the binding factory
//!   3. Format output for the terminal
//!
//! Handlers should NOT contain PDF or naming logic.

pub mod decode;
pub mod extract;
pub mod inspect;
