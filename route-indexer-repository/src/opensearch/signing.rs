//! AWS request signing settings for managed search domains.
//!
//! Signing is performed by the OpenSearch transport (SigV4); this module only
//! carries the material it needs.

use aws_credential_types::provider::SharedCredentialsProvider;
use aws_types::region::Region;
use aws_types::SdkConfig;

use crate::errors::SearchIndexError;

/// Service name for Amazon OpenSearch Service / Elasticsearch Service domains.
pub const DEFAULT_SERVICE_NAME: &str = "es";

/// Credentials, region and service name used to sign every request.
#[derive(Debug, Clone)]
pub struct RequestSigning {
    /// Region the domain lives in.
    pub region: Region,
    /// Credential source, resolved lazily per request.
    pub credentials: SharedCredentialsProvider,
    /// Service the requests are signed for (`es` or `aoss`).
    pub service_name: String,
}

impl RequestSigning {
    /// Create signing settings from explicit parts.
    pub fn new(
        region: Region,
        credentials: SharedCredentialsProvider,
        service_name: impl Into<String>,
    ) -> Self {
        Self {
            region,
            credentials,
            service_name: service_name.into(),
        }
    }

    /// Take region and credentials from a loaded AWS SDK configuration.
    ///
    /// # Returns
    ///
    /// * `Ok(RequestSigning)` - If the configuration has both a region and a credentials provider
    /// * `Err(SearchIndexError::ConnectionError)` - If either is missing
    pub fn from_sdk_config(
        config: &SdkConfig,
        service_name: impl Into<String>,
    ) -> Result<Self, SearchIndexError> {
        let region = config
            .region()
            .cloned()
            .ok_or_else(|| SearchIndexError::connection("AWS configuration has no region"))?;
        let credentials = config.credentials_provider().ok_or_else(|| {
            SearchIndexError::connection("AWS configuration has no credentials provider")
        })?;

        Ok(Self::new(region, credentials, service_name))
    }
}
