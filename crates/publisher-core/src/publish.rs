//! The publish loop.
//!
//! Each event is encoded back to compact JSON and appended to the tail of
//! the [`EVENTS_KEY`] list, one round trip per event, in input order. After
//! the last event [`SENTINEL`] is appended so consumers blocked on the head
//! of the list know the stream has ended.
//!
//! ```text
//! [e0, e1, .., eN-1]  -->  RPUSH events e0 .. RPUSH events eN-1, RPUSH events QUIT
//! ```
//!
//! There are no retries. The first failed push ends the run: the elements
//! already pushed stay in the list and the sentinel is not written.

use std::future::Future;
use std::io::Write;
use std::path::Path;

use publisher_store::{RedisListStore, StoreError};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::PublishError;
use crate::input::load_events;

/// Key of the list consumers pop events from.
pub const EVENTS_KEY: &str = "events";

/// Value appended after the last event to mark end-of-stream.
pub const SENTINEL: &str = "QUIT";

/// Something that can append a string to the tail of a named list.
pub trait ListSink {
    /// Error returned when a push fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Append `payload` to the tail of the list at `key`.
    ///
    /// Returns the length of the list after the push.
    fn push_tail(
        &mut self,
        key: &str,
        payload: &str,
    ) -> impl Future<Output = Result<u64, Self::Error>>;
}

impl ListSink for RedisListStore {
    type Error = StoreError;

    async fn push_tail(&mut self, key: &str, payload: &str) -> Result<u64, StoreError> {
        self.push(key, payload).await
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishReport {
    /// Number of events pushed, sentinel excluded.
    pub published: usize,
    /// List length reported by the sentinel push.
    pub list_len: u64,
}

/// Pushes events and the trailing sentinel onto the [`EVENTS_KEY`] list.
pub struct Publisher<S> {
    sink: S,
}

impl<S: ListSink> Publisher<S> {
    /// Create a publisher writing through `sink`.
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The underlying sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Give back the underlying sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Publish `events` in order, then the sentinel.
    ///
    /// After each successful push a `Published <json>` line is written to
    /// `out`.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError::Sink`] on the first failed push,
    /// [`PublishError::Encode`] if an event cannot be encoded, and
    /// [`PublishError::Output`] if writing to `out` fails.
    pub async fn publish<W: Write>(
        &mut self,
        events: &[Value],
        out: &mut W,
    ) -> Result<PublishReport, PublishError> {
        for (index, event) in events.iter().enumerate() {
            let payload = serde_json::to_string(event)
                .map_err(|source| PublishError::Encode { index, source })?;
            let list_len = self.push(&payload).await?;
            debug!(key = EVENTS_KEY, index, list_len, "Event pushed");
            writeln!(out, "Published {payload}")?;
        }

        let list_len = self.push(SENTINEL).await?;
        info!(
            key = EVENTS_KEY,
            published = events.len(),
            list_len,
            "Sentinel pushed, stream closed"
        );

        Ok(PublishReport {
            published: events.len(),
            list_len,
        })
    }

    async fn push(&mut self, payload: &str) -> Result<u64, PublishError> {
        self.sink
            .push_tail(EVENTS_KEY, payload)
            .await
            .map_err(|e| PublishError::Sink {
                key: EVENTS_KEY.to_owned(),
                source: Box::new(e),
            })
    }
}

/// Load `input`, connect, and publish every event followed by the sentinel.
///
/// `connect` is only called once the whole file has loaded, so a missing or
/// malformed input never reaches the network. The connected sink is handed
/// back with the report so the caller can close it.
///
/// # Errors
///
/// Returns any error from [`load_events`], [`PublishError::Connect`] if
/// `connect` fails, or any error from [`Publisher::publish`].
pub async fn run<S, C, Fut, E, W>(
    input: &Path,
    connect: C,
    out: &mut W,
) -> Result<(S, PublishReport), PublishError>
where
    S: ListSink,
    C: FnOnce() -> Fut,
    Fut: Future<Output = Result<S, E>>,
    E: std::error::Error + Send + Sync + 'static,
    W: Write,
{
    let events = load_events(input)?;

    let sink = connect()
        .await
        .map_err(|e| PublishError::Connect { source: Box::new(e) })?;

    let mut publisher = Publisher::new(sink);
    let report = publisher.publish(&events, out).await?;
    Ok((publisher.into_sink(), report))
}
