//! # Route Indexer
//!
//! Route indexer for the flights backend - reads route files from a directory,
//! derives journey fields and bulk-indexes them into OpenSearch.
//!
//! ## Architecture
//!
//! The indexer follows the Collector-Processor-Loader pattern:
//!
//! 1. **Collector**: Lists route files and decodes their JSON arrays
//! 2. **Processor**: Derives `flightType`, `startAirport` and `finalAirport`
//! 3. **Loader**: Submits each file's routes as one bulk request
//! 4. **Orchestrator**: Runs the stages file by file, stopping at the first error
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`collector`]: Route file discovery and decoding
//! - [`processor`]: Route enrichment
//! - [`loader`]: Bulk submission to the search index
//! - [`orchestrator`]: Coordinates the ingest flow
//! - [`errors`]: Error types for the indexer

pub mod collector;
pub mod config;
pub mod errors;
pub mod loader;
pub mod orchestrator;
pub mod processor;

pub use config::{Dependencies, IndexerConfig};
pub use errors::IngestError;

use thiserror::Error;

/// Errors that can occur during indexer initialization or execution.
#[derive(Error, Debug)]
pub enum IndexingError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Ingest error.
    #[error("{0}")]
    IngestError(#[from] IngestError),
}

impl IndexingError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
