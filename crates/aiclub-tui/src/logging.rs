use aiclub_core::settings::Settings;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Overrides `log_level` with a full filter directive, e.g. `aiclub_core=trace`.
const LOG_FILTER_VAR: &str = "AICLUB_LOG";

fn default_log_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "aiclub").context("no home directory for the log file")?;
    Ok(dirs.data_local_dir().join("aiclub.log"))
}

/// Install the global subscriber. The terminal belongs to the UI, so
/// everything goes to a file; returns its path.
pub fn init(settings: &Settings) -> Result<PathBuf> {
    let path = match &settings.log_file {
        Some(path) => path.clone(),
        None => default_log_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_env(LOG_FILTER_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    Ok(path)
}
