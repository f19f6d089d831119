use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Html,
};

use crate::app::errors::PageError;
use crate::app::services::AppServices;
use crate::app::views::list::{self, ListMode};
use crate::app::query;

/// `GET /`: the catalog list.
pub async fn list(
    Extension(services): Extension<Arc<AppServices>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Html<String>, PageError> {
    let records = services.load_records().await?;
    let state = query::parse(&params, services.page_size());

    Ok(Html(list::render(
        &records,
        &state,
        ListMode::Interactive {
            default_page_size: services.page_size(),
        },
    )))
}
