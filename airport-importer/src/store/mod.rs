//! Key-value store abstraction for the importer.

mod dynamodb;

pub use dynamodb::DynamoDbStore;

use async_trait::async_trait;

use crate::errors::ImportError;
use crate::marshal::Item;

/// Destination table storage.
///
/// Implementations write one item per call; nothing is batched.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Write one item to `table`, replacing any item with the same key.
    async fn put_item(&self, table: &str, item: Item) -> Result<(), ImportError>;
}
