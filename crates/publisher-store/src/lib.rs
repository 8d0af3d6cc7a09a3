//! Store layer for the event publisher.
//!
//! The publisher appends JSON-encoded events to a list held in a
//! Redis-compatible server (Redis, `Dragonfly`, `KeyDB`). Consumers pop from
//! the head of the same list until they see the end-of-stream sentinel.
//!
//! # Modules
//!
//! - [`redis_list`] -- connection handle and list operations
//! - [`error`] -- shared error type

pub mod error;
pub mod redis_list;

pub use error::StoreError;
pub use redis_list::RedisListStore;
