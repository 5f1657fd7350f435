use thiserror::Error;

use crate::data_models::SourceName;

/// Failure inside a single source adapter: transport, HTTP status or a broken selector.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid selector `{css}`: {reason}")]
    Selector { css: String, reason: String },

    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),
}

#[derive(Debug, Error)]
pub enum EcoScanError {
    /// Caller input was missing or invalid.
    #[error("{0}")]
    Validation(String),

    #[error("{source_name} adapter failed: {error}")]
    Adapter {
        source_name: SourceName,
        #[source]
        error: AdapterError,
    },

    /// The fan-out itself broke, e.g. an adapter task panicked.
    #[error("aggregation failed: {0}")]
    Aggregation(String),
}

impl EcoScanError {
    pub fn validation(message: impl Into<String>) -> Self {
        EcoScanError::Validation(message.into())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown source `{0}`")]
    UnknownSource(String),

    #[error("no sources configured")]
    NoSources,
}
