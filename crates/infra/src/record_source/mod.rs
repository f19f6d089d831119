//! Read access to the inventory table.
//!
//! A `RecordSource` returns the whole table on every call. There is no
//! filtering, paging or caching at this layer: callers re-fetch per request
//! and process the rows in memory.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use stockbook_inventory::InventoryRecord;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryRecordSource;
pub use postgres::PostgresRecordSource;

/// Fetches above this size are logged as a warning; all filtering happens in
/// memory, so latency grows linearly with the table.
pub const LARGE_RESULT_WARN_ROWS: usize = 50_000;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to connect to store: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("inventory query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("malformed inventory row: {0}")]
    Decode(String),

    #[error("failed to load fixture {path}: {message}")]
    Fixture { path: String, message: String },
}

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Read every inventory row.
    async fn fetch_all(&self) -> Result<Vec<InventoryRecord>, StoreError>;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

#[async_trait]
impl<S> RecordSource for Arc<S>
where
    S: RecordSource + ?Sized,
{
    async fn fetch_all(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        (**self).fetch_all().await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

pub(crate) fn record_fetch(source: &'static str, rows: usize, elapsed: Duration) {
    tracing::debug!(source, rows, elapsed_ms = elapsed.as_millis() as u64, "fetched inventory");
    if rows > LARGE_RESULT_WARN_ROWS {
        tracing::warn!(
            source,
            rows,
            threshold = LARGE_RESULT_WARN_ROWS,
            "inventory is large for in-memory filtering"
        );
    }
}
