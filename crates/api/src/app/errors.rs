use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use stockbook_infra::StoreError;

use crate::app::views;

/// Failure modes of a page render.
#[derive(Debug, Error)]
pub enum PageError {
    /// The requested identifier is not in the catalog.
    #[error("item {0:?} not found")]
    NotFound(String),

    /// The inventory could not be read. Not retried.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound(_) => (StatusCode::NOT_FOUND, Html(views::error::not_found())).into_response(),
            PageError::Store(e) => {
                tracing::error!(error = %e, "inventory fetch failed");
                (StatusCode::INTERNAL_SERVER_ERROR, Html(views::error::unavailable())).into_response()
            }
        }
    }
}
