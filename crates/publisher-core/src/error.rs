//! Error types for loading and publishing events.
//!
//! Load failures ([`PublishError::Read`], [`PublishError::Parse`],
//! [`PublishError::NotAnArray`]) happen before the connection is opened. A
//! [`PublishError::Sink`] ends the run where it happened: elements already
//! pushed stay in the list and the sentinel is not written.

use std::path::PathBuf;

/// Errors that can occur while loading or publishing events.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The input file does not exist or cannot be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The input file is not valid JSON.
    #[error("failed to parse {} as JSON: {source}", .path.display())]
    Parse {
        /// The path that was parsed.
        path: PathBuf,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The input file is valid JSON but its top-level value is not an array.
    #[error("expected a JSON array in {}, found {found}", .path.display())]
    NotAnArray {
        /// The path that was parsed.
        path: PathBuf,
        /// The JSON type found instead.
        found: &'static str,
    },

    /// An event could not be serialized back to a JSON string.
    #[error("failed to encode event {index}: {source}")]
    Encode {
        /// Position of the event in the input array.
        index: usize,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// The connection to the list store could not be opened.
    #[error("failed to connect to list store: {source}")]
    Connect {
        /// The underlying connection error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The list sink rejected a push.
    #[error("push to list {key} failed: {source}")]
    Sink {
        /// The list key being written.
        key: String,
        /// The underlying sink error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The progress line could not be written.
    #[error("failed to write progress output: {0}")]
    Output(#[from] std::io::Error),
}
