use thiserror::Error;

/// Core error type shared across subloop crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The options record violates a required-field rule.
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    /// The options JSON Schema could not be compiled.
    #[error("schema error: {0}")]
    Schema(String),
    /// JSON (de)serialization failure.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for results returned by subloop crates.
pub type Result<T> = std::result::Result<T, Error>;
