//! Search index error types.
//!
//! This module defines the unified error type for all search index operations.

use thiserror::Error;

/// Unified errors from search index operations.
///
/// Used by the `SearchIndexProvider` trait for connection setup and bulk
/// submission. Per-document failures inside a successful bulk response are
/// not errors at this level; they are reported in `BatchOperationSummary`.
#[derive(Debug, Clone, Error)]
pub enum SearchIndexError {
    /// Failed to set up or reach the search index backend, including signing setup.
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// The bulk request itself failed (send error or non-success HTTP status).
    #[error("Bulk index error: {0}")]
    BulkIndexError(String),

    /// Failed to parse response from search index backend.
    #[error("Parse error: {0}")]
    ParseError(String),
}

impl SearchIndexError {
    /// Create a connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::ConnectionError(msg.into())
    }

    /// Create a bulk index error.
    pub fn bulk_index(msg: impl Into<String>) -> Self {
        Self::BulkIndexError(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::ParseError(msg.into())
    }
}
