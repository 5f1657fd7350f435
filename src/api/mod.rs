use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::aggregator::Aggregator;

pub mod handlers;
pub mod models;

pub fn create_router(aggregator: Arc<Aggregator>, static_dir: &str) -> Router {
    // the browser extension and the storefront call in from other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/products/search", get(handlers::search_handler))
        .route(
            "/api/products/details/:product_id",
            get(handlers::details_handler),
        )
        .route("/api/health", get(handlers::health_handler))
        .with_state(aggregator)
        .fallback_service(ServeDir::new(static_dir))
        .layer(cors)
}
