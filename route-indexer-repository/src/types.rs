//! Request and response types for search index operations.

use serde_json::Value;

/// Default index that route documents are written to.
pub const DEFAULT_INDEX_NAME: &str = "routes";

/// Default mapping type of route documents.
pub const DEFAULT_DOCUMENT_TYPE: &str = "route";

/// Where documents are written: an index and an optional mapping type.
///
/// Backends that no longer support mapping types (OpenSearch 2.x, Elasticsearch 8)
/// reject a `_type` in bulk actions; set `document_type` to `None` for those.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTarget {
    /// The index name.
    pub index: String,
    /// The mapping type, sent as `_type` when present.
    pub document_type: Option<String>,
}

impl IndexTarget {
    /// Create a new index target.
    pub fn new(index: impl Into<String>, document_type: Option<String>) -> Self {
        Self {
            index: index.into(),
            document_type,
        }
    }
}

impl Default for IndexTarget {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_NAME, Some(DEFAULT_DOCUMENT_TYPE.to_string()))
    }
}

/// Request to index one document.
///
/// The backend assigns the document id, so resubmitting the same document
/// creates a duplicate rather than overwriting it.
#[derive(Debug, Clone)]
pub struct IndexDocumentRequest {
    /// Target index and type.
    pub target: IndexTarget,
    /// The document body.
    pub document: Value,
}

/// Result of a batch operation for a single item.
#[derive(Debug, Clone)]
pub struct BatchOperationResult {
    /// Position of the document in the submitted batch.
    pub position: usize,
    /// Id assigned by the backend, if reported.
    pub document_id: Option<String>,
    /// HTTP-style status reported for the item.
    pub status: u16,
    /// Whether the operation succeeded.
    pub success: bool,
    /// Backend error description if the operation failed.
    pub error: Option<String>,
}

/// Summary of a bulk operation containing aggregate statistics and individual results.
///
/// A successful bulk call can still contain failed items; `failed` counts them
/// and `results` carries their details. The raw response body is kept so the
/// whole response can be logged.
#[derive(Debug, Clone)]
pub struct BatchOperationSummary {
    /// Total number of items in the batch.
    pub total: usize,
    /// Number of successful operations.
    pub succeeded: usize,
    /// Number of failed operations.
    pub failed: usize,
    /// Backend processing time in milliseconds.
    pub took_ms: u64,
    /// Individual results for each item.
    pub results: Vec<BatchOperationResult>,
    /// The raw response body.
    pub response: Value,
}

impl BatchOperationSummary {
    /// A summary for a batch with no documents.
    pub fn empty() -> Self {
        Self {
            total: 0,
            succeeded: 0,
            failed: 0,
            took_ms: 0,
            results: Vec::new(),
            response: Value::Null,
        }
    }

    /// Whether any item in the batch failed.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
