use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, eyre};
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Installs a file-backed subscriber. The terminal belongs to the UI, so
/// without a log file nothing is installed.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| eyre!("failed to install log subscriber: {e}"))?;

    Ok(())
}
