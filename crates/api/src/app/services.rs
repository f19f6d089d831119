//! Record source selection and per-request data loading.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use stockbook_infra::{AppConfig, InMemoryRecordSource, PostgresRecordSource, RecordSource, StoreError};
use stockbook_inventory::InventoryRecord;

/// Shared handles for request handlers.
#[derive(Clone)]
pub struct AppServices {
    source: Arc<dyn RecordSource>,
    page_size: usize,
}

impl AppServices {
    pub fn new(source: Arc<dyn RecordSource>, page_size: usize) -> Self {
        Self { source, page_size }
    }

    /// Fresh read of the whole inventory; nothing is cached between calls.
    pub async fn load_records(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        self.source.fetch_all().await
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

/// Pick the record source: a JSON fixture when given, Postgres otherwise.
///
/// Postgres requires `DATABASE_URL`; its absence is a startup error.
pub fn build_services(config: &AppConfig, fixture: Option<&Path>) -> anyhow::Result<AppServices> {
    let source: Arc<dyn RecordSource> = match fixture {
        Some(path) => Arc::new(
            InMemoryRecordSource::from_json_file(path).context("failed to load inventory fixture")?,
        ),
        None => {
            let url = config.require_database_url()?;
            Arc::new(
                PostgresRecordSource::connect_lazy(url, config.max_connections)
                    .context("failed to configure Postgres pool")?,
            )
        }
    };

    tracing::info!(source = source.name(), page_size = config.page_size, "record source ready");
    Ok(AppServices::new(source, config.page_size))
}
