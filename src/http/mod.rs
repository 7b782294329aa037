//! HTTP layer: axum router, shared state, and error mapping.

pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the application router with all product routes wired up.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/products", get(routes::products::list_products))
        .route("/products", post(routes::products::create_product))
        .route("/products/filter", get(routes::products::filter_products))
        .route("/products/{id}", get(routes::products::get_product))
        .route("/products/{id}", delete(routes::products::delete_product))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
