//! Provision CLI
//!
//! Adds and removes tagged sections in configuration files.

mod bootstrap;
mod cli;
mod commands;
mod config;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::BodySource;
use config::BootstrapConfig;
use error::{ExitCode, Result};

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code.into(),
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            e.exit_code().into()
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => BootstrapConfig::load(path)?,
        None => BootstrapConfig::default(),
    }
    .with_overrides(cli.log_file.clone(), cli.verbose);

    bootstrap::init(&config)?;

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<ExitCode> {
    match cmd {
        Commands::Add {
            file,
            tag,
            text,
            from_file,
        } => {
            let source = match (&text, &from_file) {
                (Some(text), _) => BodySource::Text(text),
                (None, Some(path)) => BodySource::File(path),
                (None, None) => BodySource::Stdin,
            };
            commands::run_add(&file, &tag, source)
        }
        Commands::Remove { file, tag } => commands::run_remove(&file, &tag),
        Commands::Has { file, tag } => commands::run_has(&file, &tag),
        Commands::List { file, json } => commands::run_list(&file, json),
        Commands::Normalize { tag } => commands::run_normalize(&tag),
    }
}
