//! Error types for the command-line front end.

use std::path::PathBuf;

use cc_core::CcError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Calc(#[from] CcError),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type CliResult<T> = Result<T, CliError>;
