//! File description and page extraction.
//!
//! Neither operation aborts on a per-file failure: problems are logged and
//! reported in the returned records so the caller sees one entry per input.

use std::path::{Path, PathBuf};

use crate::domain::{FileInfo, ProcessResult};
use crate::naming::{page_output_name, range_output_name};
use crate::pages::{PageSelection, parse_page_range};
use crate::ports::PdfDocumentPort;
use crate::settings::Settings;

/// Drives a [`PdfDocumentPort`] on behalf of the front-end.
pub struct PdfService<P> {
    port: P,
    settings: Settings,
}

impl<P: PdfDocumentPort> PdfService<P> {
    pub const fn new(port: P, settings: Settings) -> Self {
        Self { port, settings }
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Describe each file: display name, absolute path and page count.
    ///
    /// Paths that cannot be made absolute are skipped. Unreadable documents
    /// are still listed, with the configured default page count.
    pub fn describe_files<S: AsRef<Path>>(&self, paths: &[S]) -> Vec<FileInfo> {
        let mut files = Vec::with_capacity(paths.len());

        for path in paths {
            let path = path.as_ref();
            let absolute = match std::path::absolute(path) {
                Ok(absolute) => absolute,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Failed to resolve absolute path, skipping"
                    );
                    continue;
                }
            };

            let pages = match self.port.page_count(&absolute) {
                Ok(count) => count,
                Err(e) => {
                    let fallback = self.settings.effective_default_page_count();
                    tracing::warn!(
                        path = %absolute.display(),
                        error = %e,
                        fallback,
                        "Failed to count pages, using default"
                    );
                    fallback
                }
            };

            tracing::debug!(path = %absolute.display(), pages, "Described file");
            files.push(FileInfo::new(
                display_name(&absolute),
                absolute.to_string_lossy(),
                i64::from(pages),
            ));
        }

        files
    }

    /// Extract `range` from every file in `paths`.
    ///
    /// An invalid range yields a single failed result with an empty file name.
    /// A contiguous selection produces one output file (and one result) per
    /// source; otherwise each page gets its own file and result.
    pub fn extract_pages<S: AsRef<Path>>(&self, paths: &[S], range: &str) -> Vec<ProcessResult> {
        let selection = match parse_page_range(range) {
            Ok(selection) => selection,
            Err(e) => {
                tracing::warn!(range, error = %e, "Rejected page range");
                return vec![ProcessResult::failed(
                    "",
                    format!("Failed to parse page range: {e}"),
                )];
            }
        };

        paths
            .iter()
            .flat_map(|path| self.extract_from_file(path.as_ref(), &selection))
            .collect()
    }

    fn extract_from_file(&self, path: &Path, selection: &PageSelection) -> Vec<ProcessResult> {
        let file = display_name(path);

        let source = match std::path::absolute(path) {
            Ok(source) => source,
            Err(e) => {
                return vec![ProcessResult::failed(
                    file,
                    format!("Failed to resolve absolute path: {e}"),
                )];
            }
        };

        let output_dir = match self.ensure_output_dir(&source) {
            Ok(dir) => dir,
            Err(e) => {
                tracing::warn!(
                    path = %source.display(),
                    error = %e,
                    "Failed to create output directory"
                );
                return vec![ProcessResult::failed(
                    file,
                    format!("Failed to create output directory: {e}"),
                )];
            }
        };

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let ext = source
            .extension()
            .map(|e| format!(".{}", e.to_string_lossy()))
            .unwrap_or_default();

        if selection.is_contiguous() {
            let name = range_output_name(&stem, selection.first(), selection.last(), &ext);
            let dest = output_dir.join(&name);
            let result = match self.port.extract_pages(&source, selection.pages(), &dest) {
                Ok(()) => {
                    tracing::debug!(
                        path = %source.display(),
                        dest = %dest.display(),
                        "Extracted range"
                    );
                    ProcessResult::succeeded(&file, format!("Saved to: {name}"))
                }
                Err(e) => {
                    tracing::warn!(path = %source.display(), error = %e, "Page extraction failed");
                    ProcessResult::failed(&file, format!("Failed to extract pages: {e}"))
                }
            };
            return vec![result];
        }

        selection
            .pages()
            .iter()
            .map(|&page| {
                let name = page_output_name(&stem, page, &ext);
                let dest = output_dir.join(&name);
                match self.port.extract_pages(&source, &[page], &dest) {
                    Ok(()) => ProcessResult::succeeded(&file, format!("Saved to: {name}")),
                    Err(e) => {
                        tracing::warn!(
                            path = %source.display(),
                            page,
                            error = %e,
                            "Page extraction failed"
                        );
                        ProcessResult::failed(&file, format!("Failed to extract page {page}: {e}"))
                    }
                }
            })
            .collect()
    }

    fn ensure_output_dir(&self, source: &Path) -> std::io::Result<PathBuf> {
        let parent = source.parent().unwrap_or_else(|| Path::new("."));
        let dir = parent.join(self.settings.effective_output_dir_name());
        std::fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

/// Final path component, or the whole path when there is none.
fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.to_string_lossy().into_owned(),
        |name| name.to_string_lossy().into_owned(),
    )
}
