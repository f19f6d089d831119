//! Record lookup for the detail view and static page enumeration.

use stockbook_core::{Entity, RecordId};

use crate::record::InventoryRecord;

/// Outcome of resolving one identifier against a fetched record set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a InventoryRecord),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<&'a InventoryRecord> {
        match self {
            Lookup::Found(r) => Some(r),
            Lookup::NotFound => None,
        }
    }
}

/// Linear scan for the record whose id equals `id`.
///
/// Ids are unique in the store, so the first match is the only one.
pub fn find_by_id<'a>(records: &'a [InventoryRecord], id: &str) -> Lookup<'a> {
    records
        .iter()
        .find(|r| r.id().as_str() == id)
        .map_or(Lookup::NotFound, Lookup::Found)
}

/// Every identifier in the set, in source order.
pub fn record_ids(records: &[InventoryRecord]) -> Vec<&RecordId> {
    records.iter().map(|r| r.id()).collect()
}
