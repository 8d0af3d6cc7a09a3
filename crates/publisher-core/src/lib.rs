//! Publishing logic for the event publisher.
//!
//! Reads a JSON array of events from a file and appends each element,
//! re-encoded as a JSON string, to the tail of a list in a Redis-compatible
//! store, followed by an end-of-stream sentinel.
//!
//! # Modules
//!
//! - [`config`] -- typed configuration with defaults and env overrides
//! - [`input`] -- loading the event array from disk
//! - [`publish`] -- the [`ListSink`] seam, the publish loop, and [`run`]
//! - [`error`] -- error taxonomy for loading and publishing

pub mod config;
pub mod error;
pub mod input;
pub mod publish;

pub use config::{ConfigError, PublisherConfig, RedisConfig};
pub use error::PublishError;
pub use input::{load_events, resolve_input};
pub use publish::{EVENTS_KEY, ListSink, PublishReport, Publisher, SENTINEL, run};
