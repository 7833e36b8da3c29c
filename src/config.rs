use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use serde::Deserialize;
use crate::error::{AppError, Result};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_ENV_VAR: &str = "TASKTALLY_CONFIG";

pub const DEFAULT_QUOTE: &str =
    "\"The only way to do great work is to love what you do.\" - Steve Jobs";

/// A `#RRGGBB` color from the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb(pub u8, pub u8, pub u8);

impl FromStr for Rgb {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Rgb> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AppError::InvalidColor(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| AppError::InvalidColor(s.to_string()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = AppError;

    fn try_from(s: String) -> Result<Rgb> {
        s.parse()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// User settings, read once per session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Line shown above the task list. Empty hides it.
    pub quote: String,
    /// Ask before "clear all" in the TUI.
    pub confirm_clear: bool,
    /// Bar color for completed tasks.
    pub completed_color: Rgb,
    /// Bar color for remaining tasks.
    pub remaining_color: Rgb,
    /// `tracing` filter directive, e.g. `tasktally=debug`.
    pub log_filter: Option<String>,
    /// Where the TUI writes logs; without it the TUI does not log.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            quote: DEFAULT_QUOTE.to_string(),
            confirm_clear: true,
            completed_color: Rgb(0x4C, 0xAF, 0x50),
            remaining_color: Rgb(0xFF, 0x98, 0x00),
            log_filter: None,
            log_file: None,
        }
    }
}

/// Returns the config file location.
///
/// The path is determined in the following order:
/// 1. `TASKTALLY_CONFIG` environment variable.
/// 2. `<config dir>/tasktally/config.json` (e.g. `~/.config` on Linux).
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        if !path.trim().is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::config_dir().map(|mut p| {
        p.push("tasktally");
        p.push(CONFIG_FILE_NAME);
        p
    })
}

/// Loads the config from `path`. A missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| AppError::Config { path: path.to_path_buf(), source })
}

/// Loads the config from an explicit path or the default location.
///
/// Errors come back alongside the defaults so the session can still start.
pub fn load_config(explicit: Option<&Path>) -> (Config, Option<AppError>) {
    let path = match explicit.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => return (Config::default(), None),
    };
    match load_config_from(&path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    }
}
