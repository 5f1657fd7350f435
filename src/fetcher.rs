use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::error::AdapterError;

/// Fetches a page body. Source adapters go through this seam so the parsing
/// routine can run against canned HTML.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str, headers: &HeaderMap) -> Result<String, AdapterError>;
}

/// Plain GET over a shared reqwest client. No retries, no timeout beyond the client's default.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<HttpFetcher, AdapterError> {
        let client = reqwest::Client::builder().build()?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str, headers: &HeaderMap) -> Result<String, AdapterError> {
        let res = self.client.get(url).headers(headers.clone()).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(AdapterError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = res.text().await?;
        Ok(body)
    }
}
