//! Settings domain types and validation.
//!
//! Pure domain types with no infrastructure dependencies; adapters decide
//! where the values come from (flags, environment, `.env`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default name of the directory extracted files are written to, created
/// next to each source file.
pub const DEFAULT_OUTPUT_DIR_NAME: &str = "output";

/// Page count reported when a document's pages cannot be counted.
pub const DEFAULT_PAGE_COUNT: u32 = 1;

/// Application settings structure.
///
/// All fields are optional to support partial configuration and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Directory name for extracted files (single path component).
    pub output_dir_name: Option<String>,

    /// Fallback page count for unreadable documents.
    pub default_page_count: Option<u32>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            output_dir_name: Some(DEFAULT_OUTPUT_DIR_NAME.to_string()),
            default_page_count: Some(DEFAULT_PAGE_COUNT),
        }
    }

    /// Get the effective output directory name (with default fallback).
    pub fn effective_output_dir_name(&self) -> &str {
        self.output_dir_name
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_DIR_NAME)
    }

    /// Get the effective fallback page count (with default fallback).
    #[must_use]
    pub const fn effective_default_page_count(&self) -> u32 {
        match self.default_page_count {
            Some(count) => count,
            None => DEFAULT_PAGE_COUNT,
        }
    }
}

/// Settings validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Output directory name must not be empty")]
    EmptyOutputDir,

    #[error("Output directory name must be a single path component: {0}")]
    InvalidOutputDir(String),

    #[error("Default page count must be at least 1")]
    InvalidDefaultPageCount,
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(ref name) = settings.output_dir_name {
        if name.trim().is_empty() {
            return Err(SettingsError::EmptyOutputDir);
        }
        if name == "." || name == ".." || name.contains(['/', '\\']) {
            return Err(SettingsError::InvalidOutputDir(name.clone()));
        }
    }

    if settings.default_page_count == Some(0) {
        return Err(SettingsError::InvalidDefaultPageCount);
    }

    Ok(())
}
