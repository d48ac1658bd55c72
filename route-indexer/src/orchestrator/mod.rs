//! Orchestrator module for the route indexer ingest.
//!
//! Coordinates the collector, processor, and loader components.

use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::collector::RouteSource;
use crate::errors::IngestError;
use crate::loader::BulkLoader;
use crate::processor::RouteEnricher;

/// Totals of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Entries found in the routes directory.
    pub files_listed: usize,
    /// Files whose routes were submitted.
    pub files_indexed: usize,
    /// Files that decoded to an empty array and were skipped.
    pub files_empty: usize,
    /// Documents sent to the search index.
    pub documents_submitted: usize,
    /// Documents the search index reported as rejected.
    pub documents_failed: usize,
}

/// Orchestrator that coordinates the ingest components.
///
/// The run is strictly sequential:
/// connect, list files, then for each file in listing order decode, enrich
/// and submit. The first error ends the run; files after it are not read and
/// nothing already submitted is rolled back.
pub struct Orchestrator {
    source: Arc<dyn RouteSource>,
    processor: RouteEnricher,
    loader: BulkLoader,
}

impl Orchestrator {
    /// Create a new orchestrator with the given components.
    pub fn new(source: Arc<dyn RouteSource>, processor: RouteEnricher, loader: BulkLoader) -> Self {
        Self {
            source,
            processor,
            loader,
        }
    }

    /// Run the orchestrator to completion.
    #[instrument(skip(self))]
    pub async fn run(&self) -> Result<RunSummary, IngestError> {
        info!("Starting route indexer orchestrator");

        self.loader.check_ready().await?;
        info!("Connected to search backend");

        let files = self.source.list_files().await?;
        info!(file_count = files.len(), "Listed route files");

        let mut summary = RunSummary {
            files_listed: files.len(),
            ..Default::default()
        };

        for file in &files {
            if let Err(e) = self.process_file(file, &mut summary).await {
                debug!(file = %file.display(), error = %e, "Failed to process route file");
                return Err(e);
            }
        }

        info!(
            files_indexed = summary.files_indexed,
            files_empty = summary.files_empty,
            documents_submitted = summary.documents_submitted,
            documents_failed = summary.documents_failed,
            "Route indexer run complete"
        );
        Ok(summary)
    }

    /// Decode, enrich and submit one file.
    #[instrument(skip(self, summary), fields(file = %file.display()))]
    async fn process_file(&self, file: &Path, summary: &mut RunSummary) -> Result<(), IngestError> {
        let routes = self.source.read_routes(file).await?;
        if routes.is_empty() {
            summary.files_empty += 1;
        }

        let enriched = self
            .processor
            .process_batch(routes)
            .map_err(|e| e.in_file(file))?;
        let count = enriched.len();

        let result = self.loader.load(enriched).await?;
        if count > 0 {
            summary.files_indexed += 1;
            summary.documents_submitted += count;
            summary.documents_failed += result.failed;
        }

        Ok(())
    }
}
