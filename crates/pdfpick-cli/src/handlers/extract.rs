//! Extract command handler.

use std::path::PathBuf;

use anyhow::Result;
use pdfpick_core::ProcessResult;

use crate::bootstrap::CliContext;
use crate::presentation::{print_json, print_separator, truncate_string};

/// Execute the extract command.
///
/// Returns `true` when every result succeeded.
pub fn execute(ctx: &CliContext, pages: &str, files: &[PathBuf], json: bool) -> Result<bool> {
    let results = ctx.service().extract_pages(files, pages);
    let all_succeeded = all_succeeded(&results);

    if json {
        print_json(&results)?;
        return Ok(all_succeeded);
    }

    println!("{:<6} {:<30} Message", "Status", "File");
    print_separator(80);
    for result in &results {
        let status = if result.is_success() { "ok" } else { "FAILED" };
        println!(
            "{:<6} {:<30} {}",
            status,
            truncate_string(result.file.as_deref().unwrap_or(""), 29),
            result.message.as_deref().unwrap_or(""),
        );
    }

    Ok(all_succeeded)
}

fn all_succeeded(results: &[ProcessResult]) -> bool {
    results.iter().all(ProcessResult::is_success)
}
