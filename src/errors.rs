use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while fetching and flattening a secret.
#[derive(Debug, Error)]
pub enum V2FileError {
    // --- Request errors ---
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("invalid response status: {0}")]
    UnexpectedStatus(String),

    #[error("Failed to read response body: {0}")]
    BodyRead(String),

    #[error("Failed to decode secret envelope: {0}")]
    Decode(String),

    // --- Flattening errors ---
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- Config errors ---
    #[error("Config error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for v2file results.
pub type Result<T> = std::result::Result<T, V2FileError>;
