use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::data_models::{Listing, ProductPage, SourceName};
use crate::error::AdapterError;
use crate::fetcher::PageFetcher;

pub mod amazon;
pub mod ebay;
pub mod flipkart;
pub mod profile;
pub mod snapdeal;
pub mod walmart;

pub use profile::SiteProfile;

/// One marketplace. `search` never fails: adapter errors are absorbed and show
/// up as an empty result. `details` hands its error back to the caller.
#[async_trait]
pub trait Source: Send + Sync {
    fn name(&self) -> SourceName;

    async fn search(&self, query: &str) -> Vec<Listing>;

    async fn details(&self, product_id: &str) -> Result<ProductPage, AdapterError>;
}

/// What the fetch-and-parse routine does with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log it and hand back an empty value.
    Swallow,
    /// Log it and return it.
    Propagate,
}

pub fn profile_for(name: SourceName) -> SiteProfile {
    match name {
        SourceName::Amazon => amazon::PROFILE,
        SourceName::Ebay => ebay::PROFILE,
        SourceName::Walmart => walmart::PROFILE,
        SourceName::Flipkart => flipkart::PROFILE,
        SourceName::Snapdeal => snapdeal::PROFILE,
    }
}

/// Generic scraping adapter driven by a [`SiteProfile`].
pub struct SiteSource {
    profile: SiteProfile,
    headers: HeaderMap,
    fetcher: Arc<dyn PageFetcher>,
}

impl SiteSource {
    pub fn new(
        profile: SiteProfile,
        fetcher: Arc<dyn PageFetcher>,
        user_agent: &str,
    ) -> Result<SiteSource, AdapterError> {
        profile.validate()?;
        let headers = profile.headers(user_agent)?;
        Ok(SiteSource {
            profile,
            headers,
            fetcher,
        })
    }

    async fn fetch_and_parse<T, F>(
        &self,
        url: &str,
        policy: ErrorPolicy,
        parse: F,
    ) -> Result<T, AdapterError>
    where
        T: Default,
        F: FnOnce(&str) -> Result<T, AdapterError> + Send,
    {
        log::info!("fetching {} page: {url}", self.profile.name);
        let outcome = match self.fetcher.fetch(url, &self.headers).await {
            Ok(body) => parse(&body),
            Err(e) => Err(e),
        };

        match (outcome, policy) {
            (Ok(value), _) => Ok(value),
            (Err(e), ErrorPolicy::Swallow) => {
                log::error!("error scraping {} page {url}, error: {:#}", self.profile.name, e);
                Ok(T::default())
            }
            (Err(e), ErrorPolicy::Propagate) => {
                log::error!("error scraping {} page {url}, error: {:#}", self.profile.name, e);
                Err(e)
            }
        }
    }
}

#[async_trait]
impl Source for SiteSource {
    fn name(&self) -> SourceName {
        self.profile.name
    }

    async fn search(&self, query: &str) -> Vec<Listing> {
        let url = self.profile.search_url(query);
        self.fetch_and_parse(&url, ErrorPolicy::Swallow, |html| {
            self.profile.parse_search(html)
        })
        .await
        .unwrap_or_default()
    }

    async fn details(&self, product_id: &str) -> Result<ProductPage, AdapterError> {
        let url = self.profile.detail_url(product_id);
        self.fetch_and_parse(&url, ErrorPolicy::Propagate, |html| {
            self.profile.parse_details(product_id, html)
        })
        .await
    }
}

/// Builds one [`SiteSource`] per name, in the given order, all sharing `fetcher`.
pub fn build_sources(
    names: &[SourceName],
    fetcher: Arc<dyn PageFetcher>,
    user_agent: &str,
) -> Result<Vec<Arc<dyn Source>>, AdapterError> {
    names
        .iter()
        .map(|name| -> Result<Arc<dyn Source>, AdapterError> {
            let source = SiteSource::new(profile_for(*name), fetcher.clone(), user_agent)?;
            Ok(Arc::new(source) as Arc<dyn Source>)
        })
        .collect()
}
