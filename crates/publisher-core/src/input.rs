//! Loading the event array from disk.
//!
//! The input is a UTF-8 file holding one JSON array. Elements are opaque:
//! objects, arrays and primitives are all accepted and passed through
//! untouched.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::PublisherConfig;
use crate::error::PublishError;

/// Read `path` and return the elements of its top-level JSON array, in order.
///
/// # Errors
///
/// Returns [`PublishError::Read`] if the file is missing or unreadable,
/// [`PublishError::Parse`] if it is not valid JSON, and
/// [`PublishError::NotAnArray`] if the top-level value is not an array.
pub fn load_events(path: &Path) -> Result<Vec<Value>, PublishError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PublishError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Value =
        serde_json::from_str(&contents).map_err(|source| PublishError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    match document {
        Value::Array(events) => {
            tracing::debug!(path = %path.display(), count = events.len(), "Events loaded");
            Ok(events)
        }
        other => Err(PublishError::NotAnArray {
            path: path.to_path_buf(),
            found: json_type(&other),
        }),
    }
}

/// The input path to use: the one given on the command line, or the
/// configured default.
pub fn resolve_input(arg: Option<PathBuf>, config: &PublisherConfig) -> PathBuf {
    arg.unwrap_or_else(|| config.default_input.clone())
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
