use std::sync::Arc;

use clap::{Parser, Subcommand};
use ecoscan::aggregator::Aggregator;
use ecoscan::api::create_router;
use ecoscan::config::CONFIG;
use ecoscan::fetcher::HttpFetcher;
use ecoscan::sources::build_sources;

#[derive(Parser)]
#[command(name = "ecoscan", about = "Marketplace search with a sustainability estimate")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Run one search against every configured source and print the JSON
    Search { query: String },
    /// Fetch one product page and print the JSON
    Details { source: String, product_id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber (also picks up the log crate macros)
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(true)
        .init();

    let cli = Cli::parse();

    let fetcher = Arc::new(HttpFetcher::new()?);
    let sources = build_sources(&CONFIG.sources, fetcher, &CONFIG.user_agent)?;
    let aggregator = Arc::new(Aggregator::new(sources));

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let app = create_router(aggregator, &CONFIG.static_dir);
            let listener = tokio::net::TcpListener::bind(&CONFIG.addr).await?;
            log::info!("listening on {} with sources {:?}", CONFIG.addr, CONFIG.sources);
            axum::serve(listener, app).await?;
        }
        Command::Search { query } => {
            let products = aggregator.search_all(&query).await?;
            println!("{}", serde_json::to_string_pretty(&products)?);
        }
        Command::Details { source, product_id } => {
            let product = aggregator.details(&product_id, &source).await?;
            println!("{}", serde_json::to_string_pretty(&product)?);
        }
    }
    Ok(())
}
