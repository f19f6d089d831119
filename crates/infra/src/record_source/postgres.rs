//! Postgres-backed record source.
//!
//! Reads the `merge` table that the catalog's importer maintains. Column names
//! carry spaces and capitals, so they are quoted. The table is written by an
//! external process; this side only ever selects.

use std::time::Instant;

use async_trait::async_trait;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use stockbook_core::RecordId;
use stockbook_inventory::InventoryRecord;

use super::{RecordSource, StoreError, record_fetch};

/// The one query the catalog issues: every column, every row.
pub const SELECT_ALL_RECORDS: &str = r#"
    SELECT
        xata_id,
        "Item",
        "Item Code",
        "HTS Code",
        "Category Tags",
        "Specifications"
    FROM merge
"#;

/// Postgres-backed record source.
///
/// ## Thread Safety
///
/// Wraps a SQLx connection pool, which is cheap to clone and shareable across
/// requests.
#[derive(Debug, Clone)]
pub struct PostgresRecordSource {
    pool: PgPool,
}

impl PostgresRecordSource {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a pool without opening a connection. An unreachable database
    /// surfaces on the first fetch rather than at startup.
    pub fn connect_lazy(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect_lazy(database_url)
            .map_err(StoreError::Connect)?;
        Ok(Self::new(pool))
    }

    /// Build a pool and open a first connection.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .map_err(StoreError::Connect)?;
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl RecordSource for PostgresRecordSource {
    #[tracing::instrument(name = "inventory.fetch_all", skip(self))]
    async fn fetch_all(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        let started = Instant::now();

        let rows = sqlx::query(SELECT_ALL_RECORDS)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::Query)?;

        let records = rows
            .iter()
            .map(row_to_record)
            .collect::<Result<Vec<_>, _>>()?;

        record_fetch(self.name(), records.len(), started.elapsed());
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "postgres"
    }
}

fn row_to_record(row: &PgRow) -> Result<InventoryRecord, StoreError> {
    let id: String = row
        .try_get("xata_id")
        .map_err(|e| StoreError::Decode(format!("xata_id: {e}")))?;
    let id = RecordId::new(id).map_err(|e| StoreError::Decode(e.to_string()))?;

    let text = |column: &str| -> Result<Option<String>, StoreError> {
        row.try_get::<Option<String>, _>(column)
            .map_err(|e| StoreError::Decode(format!("{column}: {e}")))
    };

    Ok(InventoryRecord {
        id,
        item: text("Item")?,
        item_code: text("Item Code")?,
        hts_code: text("HTS Code")?,
        category_tag: text("Category Tags")?,
        specifications: text("Specifications")?,
    })
}
