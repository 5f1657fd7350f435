pub mod aggregator;
pub mod api;
pub mod config;
pub mod data_models;
pub mod error;
pub mod fetcher;
pub mod scoring;
pub mod sources;
