//! Inventory catalog web front: HTTP server, HTML pages, static export.

pub mod app;
pub mod cli;
pub mod export;
