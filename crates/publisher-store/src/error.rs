//! Error types for the store layer.
//!
//! All errors are propagated via [`StoreError`] which wraps the underlying
//! [`fred`] error with context about which operation failed.

/// Errors that can occur while talking to the list store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A Redis operation failed.
    #[error("Redis error: {0}")]
    Redis(#[from] fred::error::Error),

    /// A stored element could not be decoded from JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The connection URL was rejected.
    #[error("Configuration error: {0}")]
    Config(String),
}
