//! Inventory catalog domain module.
//!
//! Record model, the in-memory table engine (search, filter, sort, paging)
//! and record lookup. Implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod lookup;
pub mod record;
pub mod table;

pub use lookup::{Lookup, find_by_id, record_ids};
pub use record::{Column, InventoryRecord, specification_sections};
pub use table::{Page, Sort, SortDirection, TableState, categories};
