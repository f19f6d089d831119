//! Static site export.
//!
//! Reads the inventory once and writes a tree that mirrors the server's
//! routes, so any static file server can host it:
//!
//! ```text
//! out/index.html              -> /
//! out/item/<id>/index.html    -> /item/<id>
//! out/404.html
//! out/ids.json                -> [{"id": "..."}, ...]
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use stockbook_infra::StoreError;
use stockbook_inventory::{TableState, record_ids};

use crate::app::AppServices;
use crate::app::views::{self, list::ListMode};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode id manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ExportReport {
    /// Detail pages written.
    pub pages: usize,
    /// Ids that cannot be used as a directory name.
    pub skipped: Vec<String>,
}

#[derive(Serialize)]
struct IdParam<'a> {
    id: &'a str,
}

pub async fn export_site(
    services: &AppServices,
    out: &Path,
    rendered_on: NaiveDate,
) -> Result<ExportReport, ExportError> {
    let records = services.load_records().await?;
    let mut report = ExportReport::default();

    write_file(
        &out.join("index.html"),
        views::list::render(&records, &TableState::new(), ListMode::Static),
    )
    .await?;
    write_file(&out.join("404.html"), views::error::not_found()).await?;

    let mut exported = Vec::new();
    for record in &records {
        let id = record.id.as_str();
        if !is_safe_segment(id) {
            tracing::warn!(id, "skipping record whose id is not a safe path segment");
            report.skipped.push(id.to_string());
            continue;
        }
        let path = out.join("item").join(id).join("index.html");
        write_file(&path, views::detail::render(record, rendered_on)).await?;
        exported.push(IdParam { id });
        report.pages += 1;
    }

    let manifest = serde_json::to_string_pretty(&exported)?;
    write_file(&out.join("ids.json"), manifest).await?;

    tracing::info!(
        out = %out.display(),
        pages = report.pages,
        skipped = report.skipped.len(),
        total = record_ids(&records).len(),
        "static export complete"
    );
    Ok(report)
}

async fn write_file(path: &Path, contents: String) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
    }
    tokio::fs::write(path, contents).await.map_err(io_err)
}

/// A single, non-traversing path component.
fn is_safe_segment(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\', '\0'])
}
