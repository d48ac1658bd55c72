//! Configuration and dependency initialization for the route indexer.
//!
//! All settings come from environment variables (optionally loaded from a
//! `.env` file), each with a default.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;
use std::path::PathBuf;

use route_indexer_repository::opensearch::DEFAULT_SERVICE_NAME;
use route_indexer_repository::{IndexTarget, DEFAULT_DOCUMENT_TYPE, DEFAULT_INDEX_NAME};
use tracing::warn;
use url::Url;

use crate::IndexingError;

/// Default directory holding the route files.
const DEFAULT_ROUTES_DIR: &str = "./routes";

/// Default OpenSearch URL.
const DEFAULT_OPENSEARCH_URL: &str = "http://localhost:9200";

/// Default AWS region for signed domains.
const DEFAULT_AWS_REGION: &str = "eu-west-1";

/// Host suffix of AWS managed search domains.
const AWS_HOST_SUFFIX: &str = ".amazonaws.com";

/// Settings for one route indexer run.
#[derive(Debug, Clone)]
pub struct IndexerConfig {
    /// Directory whose direct entries are the route files.
    pub routes_dir: PathBuf,
    /// Search backend URL.
    pub opensearch_url: String,
    /// Whether requests are signed with AWS SigV4.
    pub aws_signing: bool,
    /// Region used for signing.
    pub aws_region: String,
    /// Service name used for signing (`es` or `aoss`).
    pub service_name: String,
    /// Index and type the routes are written to.
    pub target: IndexTarget,
    /// Fail the run when the index rejects individual documents.
    pub fail_on_document_errors: bool,
}

impl IndexerConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `ROUTES_DIR`: Directory of route files (default: ./routes)
    /// - `OPENSEARCH_URL`: Search backend URL (default: http://localhost:9200)
    /// - `OPENSEARCH_AWS_SIGNING`: Sign requests with AWS SigV4 (default: true for *.amazonaws.com hosts)
    /// - `AWS_REGION`: Signing region (default: eu-west-1)
    /// - `OPENSEARCH_SERVICE_NAME`: Signing service name (default: es)
    /// - `ROUTES_INDEX`: Target index (default: routes)
    /// - `ROUTES_DOCUMENT_TYPE`: Mapping type, empty to omit (default: route)
    /// - `FAIL_ON_DOCUMENT_ERRORS`: Fail on rejected documents (default: false)
    pub fn from_env() -> Result<Self, IndexingError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, IndexingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let opensearch_url =
            lookup("OPENSEARCH_URL").unwrap_or_else(|| DEFAULT_OPENSEARCH_URL.to_string());

        let aws_signing = match lookup("OPENSEARCH_AWS_SIGNING") {
            Some(value) => parse_bool("OPENSEARCH_AWS_SIGNING", &value)?,
            None => is_aws_endpoint(&opensearch_url),
        };

        let fail_on_document_errors = match lookup("FAIL_ON_DOCUMENT_ERRORS") {
            Some(value) => parse_bool("FAIL_ON_DOCUMENT_ERRORS", &value)?,
            None => false,
        };

        let document_type = match lookup("ROUTES_DOCUMENT_TYPE") {
            Some(value) if value.trim().is_empty() => None,
            Some(value) => Some(value),
            None => Some(DEFAULT_DOCUMENT_TYPE.to_string()),
        };
        let index = lookup("ROUTES_INDEX").unwrap_or_else(|| DEFAULT_INDEX_NAME.to_string());

        Ok(Self {
            routes_dir: PathBuf::from(
                lookup("ROUTES_DIR").unwrap_or_else(|| DEFAULT_ROUTES_DIR.to_string()),
            ),
            opensearch_url,
            aws_signing,
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| DEFAULT_AWS_REGION.to_string()),
            service_name: lookup("OPENSEARCH_SERVICE_NAME")
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
            target: IndexTarget::new(index, document_type),
            fail_on_document_errors,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, IndexingError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(IndexingError::config(format!(
            "{} must be true or false, got '{}'",
            name, value
        ))),
    }
}

fn is_aws_endpoint(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .map(|host| host.ends_with(AWS_HOST_SUFFIX))
            .unwrap_or(false),
        Err(_) => {
            warn!(url = %url, "OPENSEARCH_URL is not a valid URL");
            false
        }
    }
}
