//! Error types for tsauto
//!
//! Uses `thiserror` for library errors; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::WatchError;

/// Result type alias for tsauto operations
pub type TsautoResult<T> = Result<T, TsautoError>;

/// Main error type for tsauto operations
#[derive(Error, Debug)]
pub enum TsautoError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Tool configuration could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Workspace root does not exist or is not a directory
    #[error("workspace root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// A watch subscription could not be created
    #[error(transparent)]
    Watch(#[from] WatchError),
}
