use axum::{Router, routing::get};

pub mod catalog;
pub mod item;
pub mod system;

/// Router for the catalog pages.
pub fn router() -> Router {
    Router::new()
        .route("/", get(catalog::list))
        .route("/item/:id", get(item::detail))
}
