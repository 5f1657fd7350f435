use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

use crate::data_models::SourceName;
use crate::error::ConfigError;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    let sources = get_env("ECOSCAN_SOURCES")
        .map(|raw| parse_sources(&raw))
        .unwrap_or_else(|| Ok(SourceName::ALL.to_vec()))
        .unwrap_or_else(|e| panic!("Invalid ECOSCAN_SOURCES: {e}"));
    Config {
        addr: get_env_or_default("ECOSCAN_ADDR", "0.0.0.0:3000"),
        sources,
        static_dir: get_env_or_default("ECOSCAN_STATIC_DIR", "static"),
        user_agent: get_env_or_default("ECOSCAN_USER_AGENT", DEFAULT_USER_AGENT),
    }
});

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: String,
    /// Adapters to query, in result order.
    pub sources: Vec<SourceName>,
    pub static_dir: String,
    pub user_agent: String,
}

/// Parses a comma-separated source list, keeping the first occurrence of each name.
pub fn parse_sources(raw: &str) -> Result<Vec<SourceName>, ConfigError> {
    let mut sources = Vec::new();
    for name in raw.split(',').map(|s| s.trim().to_lowercase()) {
        if name.is_empty() {
            continue;
        }
        let source: SourceName = name.parse()?;
        if !sources.contains(&source) {
            sources.push(source);
        }
    }
    if sources.is_empty() {
        return Err(ConfigError::NoSources);
    }
    Ok(sources)
}

fn get_env(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
