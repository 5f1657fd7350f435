#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use ecoscan::data_models::{Listing, ProductPage, SourceName};
use ecoscan::error::AdapterError;
use ecoscan::fetcher::PageFetcher;
use ecoscan::scoring::sustainability_score;
use ecoscan::sources::Source;

/// Serves one canned body for every URL, or fails with HTTP 503 when there is none.
pub struct StaticFetcher {
    body: Option<String>,
    pub calls: AtomicUsize,
    pub last_url: Mutex<Option<String>>,
    pub last_headers: Mutex<Option<HeaderMap>>,
}

impl StaticFetcher {
    pub fn serving(body: &str) -> StaticFetcher {
        StaticFetcher {
            body: Some(body.to_string()),
            calls: AtomicUsize::new(0),
            last_url: Mutex::new(None),
            last_headers: Mutex::new(None),
        }
    }

    pub fn failing() -> StaticFetcher {
        StaticFetcher {
            body: None,
            calls: AtomicUsize::new(0),
            last_url: Mutex::new(None),
            last_headers: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_url(&self) -> Option<String> {
        self.last_url.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str, headers: &HeaderMap) -> Result<String, AdapterError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_url.lock().unwrap() = Some(url.to_string());
        *self.last_headers.lock().unwrap() = Some(headers.clone());
        self.body.clone().ok_or_else(|| AdapterError::Status {
            url: url.to_string(),
            status: 503,
        })
    }
}

pub fn listing(id: &str, title: &str, price: f64) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        price: Some(price),
        image_url: Some(format!("https://img.example/{id}.jpg")),
        url: format!("https://shop.example/{id}"),
        sustainability_level: sustainability_score(title, None),
    }
}

pub fn page(id: &str, title: &str) -> ProductPage {
    ProductPage {
        id: id.to_string(),
        title: title.to_string(),
        price: Some(9.99),
        images: vec![format!("https://img.example/{id}.jpg")],
        description: "A product".to_string(),
        url: format!("https://shop.example/{id}"),
        sustainability_level: sustainability_score(title, Some("A product")),
        ..Default::default()
    }
}

/// In-memory source with a configurable delay and call counters.
pub struct MockSource {
    name: SourceName,
    listings: Vec<Listing>,
    delay: Duration,
    fail_details: bool,
    panic_on_search: bool,
    pub search_calls: AtomicUsize,
    pub detail_calls: AtomicUsize,
}

impl MockSource {
    pub fn new(name: SourceName, listings: Vec<Listing>) -> MockSource {
        MockSource {
            name,
            listings,
            delay: Duration::ZERO,
            fail_details: false,
            panic_on_search: false,
            search_calls: AtomicUsize::new(0),
            detail_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_delay(mut self, millis: u64) -> MockSource {
        self.delay = Duration::from_millis(millis);
        self
    }

    pub fn failing_details(mut self) -> MockSource {
        self.fail_details = true;
        self
    }

    pub fn panicking(mut self) -> MockSource {
        self.panic_on_search = true;
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Source for MockSource {
    fn name(&self) -> SourceName {
        self.name
    }

    async fn search(&self, _query: &str) -> Vec<Listing> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        if self.panic_on_search {
            panic!("{} search exploded", self.name);
        }
        self.listings.clone()
    }

    async fn details(&self, product_id: &str) -> Result<ProductPage, AdapterError> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_details {
            return Err(AdapterError::Status {
                url: format!("https://shop.example/{product_id}"),
                status: 500,
            });
        }
        Ok(page(product_id, "Organic Cotton Tote"))
    }
}
