//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: record source selection and data loading
//! - `routes/`: HTTP routes + handlers (one file per page)
//! - `query.rs`: list-view state carried in the query string
//! - `views/`: HTML rendering
//! - `errors.rs`: error pages

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

pub mod errors;
pub mod query;
pub mod routes;
pub mod services;
pub mod views;

pub use services::{AppServices, build_services};

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: AppServices) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .fallback(routes::system::fallback)
        .layer(Extension(Arc::new(services)))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
