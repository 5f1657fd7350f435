use std::sync::Arc;

use futures::future::join_all;

use crate::data_models::{ProductDetail, ProductSummary, SourceName, Sourced};
use crate::error::EcoScanError;
use crate::sources::Source;

pub const QUERY_REQUIRED: &str = "Search query is required";
pub const ID_AND_SOURCE_REQUIRED: &str = "Product ID and source are required";
pub const INVALID_SOURCE: &str = "Invalid source";

/// Fans searches out to every configured source and routes detail lookups to one.
pub struct Aggregator {
    sources: Vec<Arc<dyn Source>>,
}

impl Aggregator {
    /// `sources` order is the order results are concatenated in.
    pub fn new(sources: Vec<Arc<dyn Source>>) -> Self {
        Self { sources }
    }

    pub fn source_names(&self) -> Vec<SourceName> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Searches every source concurrently and waits for all of them. Results
    /// are tagged with their source and concatenated in configured order,
    /// whatever order the sources finish in.
    pub async fn search_all(&self, query: &str) -> Result<Vec<ProductSummary>, EcoScanError> {
        if query.trim().is_empty() {
            return Err(EcoScanError::validation(QUERY_REQUIRED));
        }

        let handles = self.sources.iter().map(|source| {
            let source = source.clone();
            let query = query.to_string();
            tokio::spawn(async move { source.search(&query).await })
        });
        let outcomes = join_all(handles).await;

        let mut products = Vec::new();
        for (source, outcome) in self.sources.iter().zip(outcomes) {
            let listings = outcome.map_err(|e| {
                log::error!("{} search task failed: {}", source.name(), e);
                EcoScanError::Aggregation(format!("{} search task failed: {}", source.name(), e))
            })?;
            log::info!("{} returned {} products", source.name(), listings.len());
            let name = source.name();
            products.extend(listings.into_iter().map(|l| Sourced::new(l, name)));
        }

        Ok(products)
    }

    /// Fetches one product page from the named source. No fallback to other sources.
    pub async fn details(&self, product_id: &str, source: &str) -> Result<ProductDetail, EcoScanError> {
        if product_id.trim().is_empty() || source.trim().is_empty() {
            return Err(EcoScanError::validation(ID_AND_SOURCE_REQUIRED));
        }

        let name: SourceName = source
            .parse()
            .map_err(|_| EcoScanError::validation(INVALID_SOURCE))?;
        let adapter = self
            .sources
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| EcoScanError::validation(INVALID_SOURCE))?;

        let page = adapter
            .details(product_id)
            .await
            .map_err(|error| EcoScanError::Adapter {
                source_name: name,
                error,
            })?;

        Ok(Sourced::new(page, name))
    }
}
