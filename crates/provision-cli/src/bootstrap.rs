//! Process-wide start-up: logging and the fatal error hook.
//!
//! Runs once from `main`. The section library never touches global state;
//! everything installed here is owned by the binary.

use crate::config::BootstrapConfig;
use crate::error::{CliError, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the tracing subscriber and the panic hook.
pub fn init(config: &BootstrapConfig) -> Result<()> {
    init_logging(config)?;
    install_panic_hook();
    tracing::debug!(?config, "bootstrap complete");
    Ok(())
}

/// Initialize a tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr, or are
/// appended to the configured log file without ANSI colours.
fn init_logging(config: &BootstrapConfig) -> Result<()> {
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level()))
        .map_err(|e| CliError::Bootstrap {
            message: format!("invalid log level '{}': {e}", config.level()),
        })?;

    let (file_layer, stderr_layer) = match &config.log_path {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| CliError::Bootstrap {
                    message: format!("cannot open log file {}: {e}", path.display()),
                })?;
            let layer = fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .compact();
            (Some(layer), None)
        }
        None => {
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact();
            (None, Some(layer))
        }
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| CliError::Bootstrap {
            message: e.to_string(),
        })
}

/// Report panics through tracing before the default hook prints them.
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "<non-string panic payload>".to_string());
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::error!(%payload, %location, "fatal error");
        default_hook(info);
    }));
}
