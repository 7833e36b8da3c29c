use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use crate::error::{AppError, Result};

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "TASKTALLY_LOG";
const DEFAULT_FILTER: &str = "warn";

/// Where log lines should go for this session.
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Picks the filter: `TASKTALLY_LOG`, then the config value, then `warn`.
pub fn build_filter(configured: Option<&str>) -> Result<EnvFilter> {
    let directive = std::env::var(LOG_ENV_VAR)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string());
    EnvFilter::try_new(&directive).map_err(|e| AppError::Logging(format!("bad filter '{}': {}", directive, e)))
}

/// Installs the global `tracing` subscriber.
pub fn init(target: LogTarget<'_>, configured_filter: Option<&str>) -> Result<()> {
    let filter = build_filter(configured_filter)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match target {
        LogTarget::Stderr => builder.with_writer(io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
    };
    installed.map_err(|e| AppError::Logging(e.to_string()))
}
