//! Processor module for the route indexer ingest.
//!
//! Computes the derived fields of route documents.

mod route_enricher;

pub use route_enricher::RouteEnricher;
