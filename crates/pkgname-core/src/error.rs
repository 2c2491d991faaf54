//! Error types for loading rule data.
//!
//! Validation itself never fails; only reading a rule file can.

use std::path::PathBuf;

/// Rule data errors.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// Rule file could not be read.
    #[error("failed to read rule file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not valid YAML or has the wrong shape.
    #[error("failed to parse rule data: {source}")]
    Parse {
        #[from]
        source: serde_yaml::Error,
    },

    /// Rule data parsed but is unusable.
    #[error("invalid rule data: {message}")]
    Invalid { message: String },
}

impl RulesError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        2
    }
}

/// Result type for rule data operations.
pub type RulesResult<T> = Result<T, RulesError>;
