//! Error types for sortline-vis.

use thiserror::Error;

/// Result type for sortline-vis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised outside the playback state machine, which itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// A command-line or request argument could not be understood.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (binding or serving)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sortline_trace::ParseAlgorithmError> for Error {
    fn from(e: sortline_trace::ParseAlgorithmError) -> Self {
        Error::InvalidArgument(e.to_string())
    }
}
