use serde::{Deserialize, Serialize};

use crate::data_models::{ProductDetail, ProductSummary, SourceName};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DetailParams {
    pub source: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub products: Vec<ProductSummary>,
}

#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub product: ProductDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub sources: Vec<SourceName>,
}
