//! Command-line adapter for pdfpick.
//!
//! Parses arguments, composes the PDF service from settings and prints the
//! records the desktop front-end would receive.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dependencies used only by main.rs
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, RecordKind};
pub use error::CliError;
pub use parser::Cli;
