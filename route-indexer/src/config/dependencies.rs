//! Dependency initialization and wiring for the route indexer.

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use tracing::info;

use crate::collector::FileCollector;
use crate::config::IndexerConfig;
use crate::errors::IngestError;
use crate::loader::{BulkLoader, LoaderConfig};
use crate::orchestrator::Orchestrator;
use crate::processor::RouteEnricher;
use crate::IndexingError;
use route_indexer_repository::{OpenSearchProvider, RequestSigning};

/// Container for all initialized dependencies.
pub struct Dependencies {
    /// The configured orchestrator ready to run.
    pub orchestrator: Orchestrator,
}

impl Dependencies {
    /// Initialize all dependencies from the given configuration.
    ///
    /// Builds the single search backend connection used for the whole run.
    /// Reachability is checked when the orchestrator starts.
    ///
    /// # Returns
    ///
    /// * `Ok(Dependencies)` - Initialized dependencies
    /// * `Err(IndexingError)` - If signing material or the client cannot be set up
    pub async fn new(config: IndexerConfig) -> Result<Self, IndexingError> {
        info!(
            routes_dir = %config.routes_dir.display(),
            opensearch_url = %config.opensearch_url,
            aws_signing = config.aws_signing,
            index = %config.target.index,
            document_type = ?config.target.document_type,
            "Initializing dependencies"
        );

        let signing = if config.aws_signing {
            Some(Self::resolve_signing(&config).await?)
        } else {
            None
        };

        let search_provider = OpenSearchProvider::new(&config.opensearch_url, signing)
            .await
            .map_err(IngestError::from)?;

        let source = FileCollector::new(config.routes_dir.clone());
        let processor = RouteEnricher::new();
        let loader = BulkLoader::with_config(
            Arc::new(search_provider),
            LoaderConfig {
                target: config.target.clone(),
                fail_on_document_errors: config.fail_on_document_errors,
            },
        );

        let orchestrator = Orchestrator::new(Arc::new(source), processor, loader);

        Ok(Self { orchestrator })
    }

    /// Resolve credentials from the ambient AWS chain (environment, shared
    /// config and credentials files, instance or container roles).
    async fn resolve_signing(config: &IndexerConfig) -> Result<RequestSigning, IndexingError> {
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.aws_region.clone()))
            .load()
            .await;

        let signing = RequestSigning::from_sdk_config(&sdk_config, config.service_name.clone())
            .map_err(IngestError::from)?;

        info!(
            region = %signing.region,
            service_name = %signing.service_name,
            "Resolved AWS request signing"
        );
        Ok(signing)
    }
}
