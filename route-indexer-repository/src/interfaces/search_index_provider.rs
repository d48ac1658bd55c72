//! Search index provider trait definition.
//!
//! This module defines the abstract interface for search index operations,
//! allowing for different backend implementations (OpenSearch, Elasticsearch, etc.).

use async_trait::async_trait;

use crate::errors::SearchIndexError;
use crate::types::{BatchOperationSummary, IndexDocumentRequest};

/// Abstracts the underlying search index implementation (OpenSearch, Elasticsearch, etc.).
///
/// Implementations are created once at startup and shared by reference with the
/// components that write to the index, which keeps them swappable for mock
/// implementations in tests.
///
/// # Guarantees
///
/// `bulk_index_documents` sends all requests in a single round trip, or reports a
/// single transport-level failure for the whole batch. It does not guarantee
/// all-or-nothing application of individual documents: per-document outcomes are
/// returned in the summary for the caller to inspect.
#[async_trait]
pub trait SearchIndexProvider: Send + Sync {
    /// Verify the backend is reachable and accepts (signed) requests.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the backend answered
    /// * `Err(SearchIndexError::ConnectionError)` - If the backend is unreachable or rejected the request
    async fn check_connection(&self) -> Result<(), SearchIndexError>;

    /// Index multiple documents in one bulk operation.
    ///
    /// # Arguments
    ///
    /// * `requests` - One index request per document, in submission order
    ///
    /// # Returns
    ///
    /// * `Ok(BatchOperationSummary)` - Aggregate statistics and per-document results
    /// * `Err(SearchIndexError::BulkIndexError)` - If the bulk call itself failed
    async fn bulk_index_documents(
        &self,
        requests: &[IndexDocumentRequest],
    ) -> Result<BatchOperationSummary, SearchIndexError>;
}
