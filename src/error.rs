use std::io;
use std::path::PathBuf;

/// Errors raised by the surfaces around the task store.
///
/// The store itself never fails: invalid input is a no-op there.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config in {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
