//! Infrastructure layer: configuration and the inventory record store.

pub mod config;
pub mod record_source;

pub use config::{AppConfig, ConfigError};
pub use record_source::{InMemoryRecordSource, PostgresRecordSource, RecordSource, StoreError};
