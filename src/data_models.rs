use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The fixed vocabulary of marketplaces a result can be tagged with.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceName {
    Amazon,
    Ebay,
    Walmart,
    Flipkart,
    Snapdeal,
}

impl SourceName {
    pub const ALL: [SourceName; 5] = [
        SourceName::Amazon,
        SourceName::Ebay,
        SourceName::Walmart,
        SourceName::Flipkart,
        SourceName::Snapdeal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceName::Amazon => "amazon",
            SourceName::Ebay => "ebay",
            SourceName::Walmart => "walmart",
            SourceName::Flipkart => "flipkart",
            SourceName::Snapdeal => "snapdeal",
        }
    }
}

impl fmt::Display for SourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownSource(s.to_string()))
    }
}

/// One search hit as scraped from a results page, before it is tagged with its source.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub title: String,
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub url: String,
    pub sustainability_level: u8,
}

/// A scraped product detail page.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub id: String,
    pub title: String,
    pub price: Option<f64>,
    pub images: Vec<String>,
    pub description: String,
    pub specs: HashMap<String, String>,
    pub url: String,
    pub sustainability_level: u8,
}

/// A scraped value tagged with the adapter that produced it. Serialises flat,
/// i.e. the product's fields plus a `source` field.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Sourced<T> {
    #[serde(flatten)]
    pub product: T,
    pub source: SourceName,
}

impl<T> Sourced<T> {
    pub fn new(product: T, source: SourceName) -> Sourced<T> {
        Sourced { product, source }
    }
}

pub type ProductSummary = Sourced<Listing>;
pub type ProductDetail = Sourced<ProductPage>;
