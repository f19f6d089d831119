use std::collections::HashSet;
use std::path::Path;
use std::sync::RwLock;
use std::time::Instant;

use async_trait::async_trait;

use stockbook_inventory::InventoryRecord;

use super::{RecordSource, StoreError, record_fetch};

/// In-memory record source for tests/dev.
///
/// `replace` swaps the whole set, standing in for an external writer.
#[derive(Debug, Default)]
pub struct InMemoryRecordSource {
    inner: RwLock<Vec<InventoryRecord>>,
}

impl InMemoryRecordSource {
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        Self {
            inner: RwLock::new(records),
        }
    }

    /// Load a JSON array of records. Duplicate ids are rejected.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let fixture_err = |message: String| StoreError::Fixture {
            path: path.display().to_string(),
            message,
        };

        let raw = std::fs::read_to_string(path).map_err(|e| fixture_err(e.to_string()))?;
        let records: Vec<InventoryRecord> =
            serde_json::from_str(&raw).map_err(|e| fixture_err(e.to_string()))?;

        let mut seen = HashSet::new();
        for r in &records {
            if !seen.insert(r.id.as_str()) {
                return Err(fixture_err(format!("duplicate id {}", r.id)));
            }
        }

        tracing::info!(path = %path.display(), records = records.len(), "loaded inventory fixture");
        Ok(Self::new(records))
    }

    pub fn replace(&self, records: Vec<InventoryRecord>) {
        match self.inner.write() {
            Ok(mut inner) => *inner = records,
            Err(poisoned) => *poisoned.into_inner() = records,
        }
    }
}

#[async_trait]
impl RecordSource for InMemoryRecordSource {
    async fn fetch_all(&self) -> Result<Vec<InventoryRecord>, StoreError> {
        let started = Instant::now();
        let records = match self.inner.read() {
            Ok(inner) => inner.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        };
        record_fetch(self.name(), records.len(), started.elapsed());
        Ok(records)
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
