//! Airport Importer Main Entry Point

use std::env;
use std::io;
use std::process::ExitCode;

use airport_importer::{Dependencies, ImportError, ImporterConfig};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("airport_importer=info"));

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
}

async fn run() -> Result<usize, ImportError> {
    let config = ImporterConfig::from_env()?;
    let deps = Dependencies::new(config).await;
    deps.importer.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    init_tracing();

    info!("Starting airport importer");

    match run().await {
        Ok(count) => {
            info!(items_written = count, "Airport importer completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Airport importer failed");
            println!("{}", e);
            ExitCode::FAILURE
        }
    }
}
