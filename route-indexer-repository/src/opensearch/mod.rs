//! OpenSearch implementation of the search index provider.
//!
//! This module provides a concrete implementation of `SearchIndexProvider`
//! using OpenSearch (or a compatible Elasticsearch domain) as the backend.

mod bulk;
mod provider;
mod signing;

pub use provider::OpenSearchProvider;
pub use signing::{RequestSigning, DEFAULT_SERVICE_NAME};
