//! Subcommands.

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show name, absolute path and page count of PDF files
    Inspect {
        /// PDF files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Extract a page range from PDF files into the output directory
    Extract {
        /// Pages to extract, e.g. "1-3" (one file) or "1,4,6" (one file per page)
        #[arg(short, long)]
        pages: String,
        /// PDF files to extract from
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Decode a record from JSON text (argument or stdin) and print it canonically
    Decode {
        /// Record type to build
        #[arg(value_enum)]
        kind: RecordKind,
        /// JSON text; read from stdin when omitted
        input: Option<String>,
    },
}

/// Record types accepted by `decode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    FileInfo,
    ProcessResult,
}
