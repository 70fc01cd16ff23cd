//! Scene configuration errors.

use thiserror::Error;

/// Error loading a scene configuration file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigLoadError {
    #[error("failed to read scene file: {0}")]
    Io(String),

    #[error("failed to parse scene file: {0}")]
    Parse(String),
}
