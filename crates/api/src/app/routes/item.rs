use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Html,
};
use chrono::Utc;

use stockbook_inventory::find_by_id;

use crate::app::errors::PageError;
use crate::app::services::AppServices;
use crate::app::views;

/// `GET /item/:id`: one record, or the 404 page.
pub async fn detail(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let records = services.load_records().await?;

    let Some(record) = find_by_id(&records, &id).found() else {
        tracing::info!(id = %id, "item not found");
        return Err(PageError::NotFound(id));
    };

    Ok(Html(views::detail::render(record, Utc::now().date_naive())))
}
