//! Dependency initialization and wiring for the airport importer.

use std::sync::Arc;

use aws_config::BehaviorVersion;
use tracing::info;

use crate::config::ImporterConfig;
use crate::importer::AirportImporter;
use crate::store::DynamoDbStore;

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured importer ready to run.
    pub importer: AirportImporter,
}

impl Dependencies {
    /// Build the DynamoDB client from the ambient AWS configuration and wire
    /// the importer around it.
    pub async fn new(config: ImporterConfig) -> Self {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest()).load().await;

        info!(
            airports_file = %config.airports_file.display(),
            table = %config.table_name,
            region = ?sdk_config.region(),
            "Initializing dependencies"
        );

        let store = DynamoDbStore::new(&sdk_config);
        let importer = AirportImporter::new(Arc::new(store), config.airports_file, config.table_name);

        Self { importer }
    }
}
