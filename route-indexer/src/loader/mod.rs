//! Loader module for the route indexer ingest.
//!
//! Submits enriched routes to the search index, one bulk request per batch.

use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::errors::IngestError;
use route_indexer_repository::{
    BatchOperationSummary, IndexDocumentRequest, IndexTarget, SearchIndexProvider,
};
use route_indexer_shared::RouteRecord;

/// Configuration for the bulk loader.
#[derive(Debug, Clone, Default)]
pub struct LoaderConfig {
    /// Index and type the routes are written to.
    pub target: IndexTarget,
    /// Treat documents rejected inside a successful bulk response as a failure.
    ///
    /// Off by default: rejected documents are logged and the run continues.
    pub fail_on_document_errors: bool,
}

/// Loader that indexes route documents into the search engine.
///
/// The loader is responsible for:
/// - Converting RouteRecords to IndexDocumentRequests
/// - Submitting each batch as a single bulk operation
/// - Reporting the outcome of every batch
pub struct BulkLoader {
    provider: Arc<dyn SearchIndexProvider>,
    config: LoaderConfig,
}

impl BulkLoader {
    /// Create a new bulk loader with the given provider.
    pub fn new(provider: Arc<dyn SearchIndexProvider>) -> Self {
        Self {
            provider,
            config: LoaderConfig::default(),
        }
    }

    /// Create a new bulk loader with custom configuration.
    pub fn with_config(provider: Arc<dyn SearchIndexProvider>, config: LoaderConfig) -> Self {
        Self { provider, config }
    }

    /// Submit one batch of enriched routes.
    ///
    /// An empty batch is not sent: the summary is empty and the backend is not called.
    #[instrument(skip(self, routes), fields(route_count = routes.len()))]
    pub async fn load(&self, routes: Vec<RouteRecord>) -> Result<BatchOperationSummary, IngestError> {
        if routes.is_empty() {
            info!("No routes to upload, skipping bulk request");
            return Ok(BatchOperationSummary::empty());
        }

        let requests = routes
            .iter()
            .map(|route| {
                serde_json::to_value(route)
                    .map(|document| IndexDocumentRequest {
                        target: self.config.target.clone(),
                        document,
                    })
                    .map_err(|e| IngestError::Serialization(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let count = requests.len();

        let summary = match self.provider.bulk_index_documents(&requests).await {
            Ok(summary) => summary,
            Err(e) => {
                debug!(error = %e, count = count, "Got error on uploading data");
                return Err(IngestError::batch_transport(e.to_string()));
            }
        };

        if summary.has_failures() {
            warn!(
                succeeded = summary.succeeded,
                failed = summary.failed,
                "Bulk upload completed with some rejected documents"
            );
            for result in summary.results.iter().filter(|r| !r.success) {
                warn!(
                    position = result.position,
                    status = result.status,
                    error = ?result.error,
                    "Document rejected"
                );
            }

            if self.config.fail_on_document_errors {
                return Err(IngestError::DocumentsRejected {
                    failed: summary.failed,
                    total: summary.total,
                });
            }
        }

        info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            took_ms = summary.took_ms,
            response = %summary.response,
            "Successfully uploaded"
        );
        Ok(summary)
    }

    /// Check that the search backend is reachable.
    pub async fn check_ready(&self) -> Result<(), IngestError> {
        self.provider.check_connection().await?;
        Ok(())
    }
}
