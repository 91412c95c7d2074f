//! CLI entry point - the composition root.
//!
//! Loads `.env`, parses arguments, installs logging, bootstraps the context
//! and dispatches to handlers.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdfpick_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = CliConfig::from_cli(&cli);

    match cli.command {
        Commands::Inspect { files, json } => {
            let ctx = bootstrap(config).map_err(CliError::from)?;
            handlers::inspect::execute(&ctx, &files, json)?;
        }
        Commands::Extract { pages, files, json } => {
            let ctx = bootstrap(config).map_err(CliError::from)?;
            if !handlers::extract::execute(&ctx, &pages, &files, json)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Decode { kind, input } => {
            handlers::decode::execute(kind, input)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let code = e.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
