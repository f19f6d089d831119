use axum::{
    http::StatusCode,
    response::{Html, IntoResponse},
};

use crate::app::views;

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Unknown paths get the same 404 page as unknown items.
pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::error::not_found()))
}
