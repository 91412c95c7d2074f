//! Inspect command handler.
//!
//! Lists PDF files with their page counts.

use std::path::PathBuf;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{format_optional, print_json, print_separator, truncate_string};

/// Execute the inspect command.
///
/// Unreadable documents still appear, with the configured default page count.
pub fn execute(ctx: &CliContext, files: &[PathBuf], json: bool) -> Result<()> {
    let infos = ctx.service().describe_files(files);

    if json {
        print_json(&infos)?;
        return Ok(());
    }

    if infos.is_empty() {
        println!("No files could be resolved.");
        return Ok(());
    }

    println!("{:<30} {:>6}  Path", "Name", "Pages");
    print_separator(80);
    for info in &infos {
        println!(
            "{:<30} {:>6}  {}",
            truncate_string(info.name.as_deref().unwrap_or("--"), 29),
            format_optional(info.pages.as_ref(), "--"),
            info.path.as_deref().unwrap_or("--"),
        );
    }

    Ok(())
}
