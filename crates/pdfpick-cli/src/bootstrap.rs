//! CLI bootstrap - the composition root.
//!
//! The only place where the PDF backend is chosen and wired into the core
//! service. Handlers receive the composed context.

use pdfpick_core::{CoreError, PdfService, Settings, validate_settings};
use pdfpick_pdf::LopdfBackend;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub settings: Settings,
}

impl CliConfig {
    /// Defaults overlaid with whatever the command line (or environment) set.
    pub fn from_cli(cli: &Cli) -> Self {
        let mut settings = Settings::with_defaults();
        if let Some(ref dir) = cli.output_dir {
            settings.output_dir_name = Some(dir.clone());
        }
        if let Some(pages) = cli.default_pages {
            settings.default_page_count = Some(pages);
        }
        Self { settings }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    service: PdfService<LopdfBackend>,
}

impl CliContext {
    pub const fn service(&self) -> &PdfService<LopdfBackend> {
        &self.service
    }
}

/// Validate configuration and compose the context.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CoreError> {
    validate_settings(&config.settings)?;
    tracing::debug!(settings = ?config.settings, "Bootstrapping CLI context");
    Ok(CliContext {
        service: PdfService::new(LopdfBackend::new(), config.settings),
    })
}
