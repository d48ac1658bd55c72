//! OpenSearch provider implementation.
//!
//! This module provides the concrete implementation of `SearchIndexProvider`
//! using the OpenSearch Rust crate.

use async_trait::async_trait;
use opensearch::{
    auth::Credentials,
    http::request::JsonBody,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
    BulkParts, OpenSearch,
};
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::errors::SearchIndexError;
use crate::interfaces::SearchIndexProvider;
use crate::opensearch::bulk;
use crate::opensearch::signing::RequestSigning;
use crate::types::{BatchOperationSummary, IndexDocumentRequest};

/// OpenSearch provider implementation.
///
/// Holds one long-lived client. When `RequestSigning` is supplied, every request
/// is signed with AWS SigV4 for the configured service.
///
/// # Example
///
/// ```ignore
/// let provider = OpenSearchProvider::new("http://localhost:9200", None).await?;
/// provider.check_connection().await?;
/// let summary = provider.bulk_index_documents(&requests).await?;
/// ```
pub struct OpenSearchProvider {
    client: OpenSearch,
}

impl OpenSearchProvider {
    /// Create a new OpenSearch provider for the specified URL.
    ///
    /// No request is sent here; use `check_connection` to verify reachability.
    ///
    /// # Arguments
    ///
    /// * `url` - The OpenSearch server URL (e.g., "http://localhost:9200")
    /// * `signing` - AWS signing settings, or `None` for an unsigned backend
    ///
    /// # Returns
    ///
    /// * `Ok(OpenSearchProvider)` - A new provider instance
    /// * `Err(SearchIndexError)` - If the URL is invalid or transport setup fails
    pub async fn new(url: &str, signing: Option<RequestSigning>) -> Result<Self, SearchIndexError> {
        let parsed_url =
            Url::parse(url).map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let conn_pool = SingleNodeConnectionPool::new(parsed_url);
        let mut builder = TransportBuilder::new(conn_pool).disable_proxy();

        let region = signing.as_ref().map(|s| s.region.to_string());
        if let Some(signing) = signing {
            builder = builder
                .auth(Credentials::AwsSigV4(signing.credentials, signing.region))
                .service_name(&signing.service_name);
        }

        let transport = builder
            .build()
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let client = OpenSearch::new(transport);

        info!(
            url = %url,
            signed = region.is_some(),
            region = ?region,
            "Created OpenSearch provider"
        );

        Ok(Self { client })
    }
}

#[async_trait]
impl SearchIndexProvider for OpenSearchProvider {
    async fn check_connection(&self) -> Result<(), SearchIndexError> {
        let response = self
            .client
            .ping()
            .send()
            .await
            .map_err(|e| SearchIndexError::connection(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            debug!(status = %status, "Ping request failed");
            return Err(SearchIndexError::connection(format!(
                "Ping failed with status {}",
                status
            )));
        }

        debug!("Search backend reachable");
        Ok(())
    }

    /// Index multiple documents with a single `_bulk` request.
    ///
    /// A send failure or non-success status fails the whole batch. Item-level
    /// failures of a successful request are returned in the summary.
    async fn bulk_index_documents(
        &self,
        requests: &[IndexDocumentRequest],
    ) -> Result<BatchOperationSummary, SearchIndexError> {
        let body: Vec<JsonBody<Value>> = bulk::bulk_body(requests)
            .into_iter()
            .map(JsonBody::new)
            .collect();

        let response = self
            .client
            .bulk(BulkParts::None)
            .body(body)
            .send()
            .await
            .map_err(|e| SearchIndexError::bulk_index(e.to_string()))?;

        let status = response.status_code();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            debug!(status = %status, body = %error_body, "Bulk request failed");
            return Err(SearchIndexError::bulk_index(format!(
                "Bulk request failed with status {}: {}",
                status, error_body
            )));
        }

        let response_body: Value = response
            .json()
            .await
            .map_err(|e| SearchIndexError::parse(e.to_string()))?;

        let summary = bulk::parse_bulk_response(response_body)?;
        debug!(
            total = summary.total,
            failed = summary.failed,
            took_ms = summary.took_ms,
            "Bulk request completed"
        );
        Ok(summary)
    }
}
