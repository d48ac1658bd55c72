//! # Route Indexer Repository
//!
//! This crate provides traits and implementations for writing route documents
//! to the search index. It includes definitions for errors, interfaces, and a
//! concrete implementation for OpenSearch (including AWS-signed domains).

pub mod errors;
pub mod interfaces;
pub mod opensearch;
pub mod types;

pub use errors::SearchIndexError;
pub use interfaces::SearchIndexProvider;
pub use opensearch::{OpenSearchProvider, RequestSigning};
pub use types::{
    BatchOperationResult, BatchOperationSummary, IndexDocumentRequest, IndexTarget,
    DEFAULT_DOCUMENT_TYPE, DEFAULT_INDEX_NAME,
};
