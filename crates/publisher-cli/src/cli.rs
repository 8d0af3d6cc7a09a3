//! Command-line arguments.
//!
//! The publisher takes at most one positional argument, the input file.
//! Anything beyond that is a usage error reported before any file or
//! network access.

use std::path::PathBuf;

use clap::Parser;

/// Publish a JSON array of events to a Redis list, one `RPUSH` per event,
/// followed by an end-of-stream sentinel.
#[derive(Debug, Parser)]
#[command(name = "publish-events", version)]
pub struct Cli {
    /// JSON file holding an array of events. Defaults to the configured
    /// input, `fixtures/events.json` unless overridden.
    pub input: Option<PathBuf>,
}
