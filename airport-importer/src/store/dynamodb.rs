//! DynamoDB implementation of the key-value store.

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::Client;
use aws_config::SdkConfig;
use tracing::{debug, instrument};

use super::KeyValueStore;
use crate::errors::ImportError;
use crate::marshal::Item;

/// Store writing items with DynamoDB `PutItem`.
#[derive(Debug, Clone)]
pub struct DynamoDbStore {
    client: Client,
}

impl DynamoDbStore {
    /// Create a store from a loaded AWS configuration.
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl KeyValueStore for DynamoDbStore {
    #[instrument(skip(self, item), fields(attributes = item.len()))]
    async fn put_item(&self, table: &str, item: Item) -> Result<(), ImportError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| ImportError::put_item(DisplayErrorContext(&e).to_string()))?;

        debug!("Item written");
        Ok(())
    }
}
