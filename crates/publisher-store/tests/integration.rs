//! Integration tests for the `publisher-store` list operations.
//!
//! These tests require a live Redis-compatible server. Run with:
//!
//! ```bash
//! docker run --rm -p 6379:6379 redis:7
//! cargo test -p publisher-store -- --ignored
//! ```
//!
//! All tests are marked `#[ignore]` so they are skipped during normal
//! `cargo test` runs.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]

use publisher_store::RedisListStore;
use serde_json::{Value, json};

/// Redis connection URL for the local Docker instance.
const REDIS_URL: &str = "redis://localhost:6379/0";

async fn fresh_list(key: &str) -> RedisListStore {
    let store = RedisListStore::connect(REDIS_URL)
        .await
        .expect("Failed to connect to Redis -- is Docker running?");
    store.delete(key).await.expect("Failed to clear list");
    store
}

#[tokio::test]
#[ignore = "requires live Redis instance"]
async fn push_appends_to_tail_in_order() {
    let key = "publisher-store:test:order";
    let store = fresh_list(key).await;

    assert_eq!(store.push(key, "a").await.unwrap(), 1);
    assert_eq!(store.push(key, "b").await.unwrap(), 2);
    assert_eq!(store.push(key, "c").await.unwrap(), 3);

    assert_eq!(store.range(key).await.unwrap(), vec!["a", "b", "c"]);
    assert_eq!(store.len(key).await.unwrap(), 3);

    store.delete(key).await.unwrap();
    store.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "requires live Redis instance"]
async fn range_json_decodes_pushed_documents() {
    let key = "publisher-store:test:json";
    let store = fresh_list(key).await;

    let doc = json!({"id": "abc", "size": 5000, "tags": ["x", "y"]});
    store.push(key, &doc.to_string()).await.unwrap();
    store.push(key, "42").await.unwrap();

    let decoded: Vec<Value> = store.range_json(key).await.unwrap();
    assert_eq!(decoded, vec![doc, json!(42)]);

    store.delete(key).await.unwrap();
    store.quit().await.unwrap();
}

#[tokio::test]
#[ignore = "requires live Redis instance"]
async fn missing_key_reads_as_empty() {
    let key = "publisher-store:test:missing";
    let store = fresh_list(key).await;

    assert!(store.range(key).await.unwrap().is_empty());
    assert_eq!(store.len(key).await.unwrap(), 0);

    store.quit().await.unwrap();
}
