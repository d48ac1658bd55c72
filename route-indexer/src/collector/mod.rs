//! Collector module for the route indexer ingest.
//!
//! Discovers route files in a directory and decodes their contents.

mod file_collector;

pub use file_collector::{list_files, read_routes, FileCollector, RouteSource};
