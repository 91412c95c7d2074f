//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for inspecting PDFs and extracting page ranges.
#[derive(Parser)]
#[command(name = "pdfpick")]
#[command(about = "Inspect PDF files and extract page ranges")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Directory name for extracted files, created next to each source
    #[arg(long = "output-dir", env = "PDFPICK_OUTPUT_DIR", global = true)]
    pub output_dir: Option<String>,

    /// Page count reported for documents that cannot be read
    #[arg(long = "default-pages", env = "PDFPICK_DEFAULT_PAGES", global = true)]
    pub default_pages: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}
