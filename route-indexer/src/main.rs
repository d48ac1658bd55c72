//! Route Indexer Main Entry Point
//!
//! Loads every route file from the routes directory into the search index,
//! then exits. Any error stops the run with a non-zero exit status.

use std::env;
use std::io;
use std::process::ExitCode;

use dotenv::dotenv;
use route_indexer::{Dependencies, IndexerConfig, IndexingError};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging.
///
/// Logs go to stderr; stdout only carries the final error line.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("route_indexer=info,route_indexer_repository=info"));

    let json = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(io::stderr)
                    .pretty(),
            )
            .init();
    }

    info!(
        service_name = "route-indexer",
        service_version = env!("CARGO_PKG_VERSION"),
        json = json,
        "Tracing initialized"
    );
}

async fn run() -> Result<(), IndexingError> {
    let config = IndexerConfig::from_env()?;
    let deps = Dependencies::new(config).await?;
    let summary = deps.orchestrator.run().await?;

    info!(
        files_indexed = summary.files_indexed,
        documents_submitted = summary.documents_submitted,
        "Route indexer completed successfully"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv().ok();

    init_tracing();

    info!("Starting route indexer");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Route indexer failed");
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
