//! Error types for the publisher binary.
//!
//! [`CliError`] is the top-level error that wraps every failure mode of a
//! run, so `main` can propagate with `?`.

/// Top-level error for the publisher binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: publisher_core::ConfigError,
    },

    /// Loading or publishing events failed.
    #[error("publish error: {source}")]
    Publish {
        /// The underlying publish error.
        #[from]
        source: publisher_core::PublishError,
    },

    /// Connecting to or closing the store failed.
    #[error("store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: publisher_store::StoreError,
    },
}
