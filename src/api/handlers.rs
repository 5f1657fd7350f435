use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use std::time::Instant;

use crate::aggregator::Aggregator;
use crate::error::EcoScanError;

use super::models::{
    DetailParams, DetailResponse, ErrorResponse, HealthResponse, SearchParams, SearchResponse,
};

pub const SEARCH_FAILED: &str = "Failed to search for products";
pub const DETAILS_FAILED: &str = "Failed to get product details";

type ApiError = (StatusCode, Json<ErrorResponse>);

/// Validation errors keep their message; everything else becomes a 500 with `fallback`.
fn error_response(err: EcoScanError, fallback: &str) -> ApiError {
    let (status, message) = match err {
        EcoScanError::Validation(message) => (StatusCode::BAD_REQUEST, message),
        other => {
            log::error!("{fallback}: {:#}", other);
            (StatusCode::INTERNAL_SERVER_ERROR, fallback.to_string())
        }
    };
    (status, Json(ErrorResponse { error: message }))
}

pub async fn search_handler(
    State(aggregator): State<Arc<Aggregator>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let start = Instant::now();
    let query = params.query.unwrap_or_default();

    let products = aggregator
        .search_all(&query)
        .await
        .map_err(|e| error_response(e, SEARCH_FAILED))?;

    log::info!(
        "search {query:?}: {} products in {}ms",
        products.len(),
        start.elapsed().as_millis()
    );
    Ok(Json(SearchResponse { products }))
}

pub async fn details_handler(
    State(aggregator): State<Arc<Aggregator>>,
    Path(product_id): Path<String>,
    Query(params): Query<DetailParams>,
) -> Result<Json<DetailResponse>, ApiError> {
    let source = params.source.unwrap_or_default();

    let product = aggregator
        .details(&product_id, &source)
        .await
        .map_err(|e| error_response(e, DETAILS_FAILED))?;

    Ok(Json(DetailResponse { product }))
}

pub async fn health_handler(State(aggregator): State<Arc<Aggregator>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        sources: aggregator.source_names(),
    })
}
