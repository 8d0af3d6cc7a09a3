//! List operations against a Redis-compatible server.
//!
//! Only the list commands the publisher and its tooling need are exposed:
//!
//! | Command | Method | Use |
//! |---------|--------|-----|
//! | `RPUSH` | [`RedisListStore::push`] | append one element to the tail |
//! | `LRANGE` | [`RedisListStore::range`] | read the whole list, oldest first |
//! | `LLEN` | [`RedisListStore::len`] | current list length |
//! | `DEL` | [`RedisListStore::delete`] | drop the list |

use fred::prelude::*;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Connection handle to a Redis-compatible instance.
///
/// Wraps a [`fred::prelude::Client`]. The connection is opened once by
/// [`RedisListStore::connect`] and reused for every command.
#[derive(Clone)]
pub struct RedisListStore {
    client: Client,
}

impl RedisListStore {
    /// Connect to the server at the given URL.
    ///
    /// The URL follows the Redis URL scheme:
    /// `redis://host:port` or `redis://host:port/db`
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the URL cannot be parsed.
    /// Returns [`StoreError::Redis`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let config = Config::from_url(url)
            .map_err(|e| StoreError::Config(format!("Invalid Redis URL: {e}")))?;

        let client = Builder::from_config(config).build()?;
        client.init().await?;

        tracing::info!("Connected to Redis");
        Ok(Self { client })
    }

    /// Append `payload` to the tail of the list at `key` (RPUSH).
    ///
    /// Returns the length of the list after the push.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the write fails.
    pub async fn push(&self, key: &str, payload: &str) -> Result<u64, StoreError> {
        let len: u64 = self.client.rpush(key, payload).await?;
        Ok(len)
    }

    /// Read every element of the list at `key`, oldest first.
    ///
    /// A missing key reads as an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the read fails.
    pub async fn range(&self, key: &str) -> Result<Vec<String>, StoreError> {
        let values: Vec<String> = self.client.lrange(key, 0, -1).await?;
        Ok(values)
    }

    /// Read every element of the list at `key` and decode each from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if any element is not valid JSON
    /// for `T`, or [`StoreError::Redis`] if the read fails.
    pub async fn range_json<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        let values = self.range(key).await?;
        let mut decoded = Vec::with_capacity(values.len());
        for v in &values {
            decoded.push(serde_json::from_str(v)?);
        }
        Ok(decoded)
    }

    /// Current length of the list at `key` (LLEN).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the read fails.
    pub async fn len(&self, key: &str) -> Result<u64, StoreError> {
        let len: u64 = self.client.llen(key).await?;
        Ok(len)
    }

    /// Delete the list at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the delete fails.
    pub async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let _: u32 = self.client.del(key).await?;
        Ok(())
    }

    /// Close the connection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Redis`] if the server rejects `QUIT`.
    pub async fn quit(&self) -> Result<(), StoreError> {
        self.client.quit().await?;
        tracing::debug!("Redis connection closed");
        Ok(())
    }
}
