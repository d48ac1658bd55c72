//! Airport import run.
//!
//! Reads the whole airports file, then writes its records one at a time in
//! file order. The first failing record ends the run; records written before
//! it stay in the table.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;
use tokio::fs;
use tracing::{debug, info, instrument};

use crate::errors::ImportError;
use crate::marshal::to_item;
use crate::store::KeyValueStore;

/// Read the airports file as a JSON array of arbitrary values.
#[instrument]
pub async fn read_airports(path: &Path) -> Result<Vec<Value>, ImportError> {
    let raw = fs::read(path)
        .await
        .map_err(|e| ImportError::file_read(path, e.to_string()))?;

    let records: Vec<Value> =
        serde_json::from_slice(&raw).map_err(|e| ImportError::decode(path, e.to_string()))?;

    debug!(record_count = records.len(), "Decoded airports file");
    Ok(records)
}

/// Writes every record of one airports file into one table.
pub struct AirportImporter {
    store: Arc<dyn KeyValueStore>,
    airports_file: PathBuf,
    table_name: String,
}

impl AirportImporter {
    /// Create an importer writing `airports_file` into `table_name` through `store`.
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        airports_file: impl Into<PathBuf>,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            airports_file: airports_file.into(),
            table_name: table_name.into(),
        }
    }

    /// Run the import and return the number of items written.
    #[instrument(skip(self), fields(file = %self.airports_file.display(), table = %self.table_name))]
    pub async fn run(&self) -> Result<usize, ImportError> {
        info!("Starting airport import");

        let records = read_airports(&self.airports_file).await?;
        info!(record_count = records.len(), "Read airports file");

        for (position, record) in records.iter().enumerate() {
            if let Err(e) = self.import_record(position, record).await {
                debug!(position, error = %e, "Failed to import airport");
                return Err(e);
            }
        }

        info!(items_written = records.len(), "Airport import complete");
        Ok(records.len())
    }

    async fn import_record(&self, position: usize, record: &Value) -> Result<(), ImportError> {
        let item = to_item(position, record)?;
        self.store.put_item(&self.table_name, item).await?;
        debug!(position, "Airport written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_airports() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("airports.json");
        std_fs::write(&path, r#"[{"iataCode":"WRO"},{"iataCode":"LHR"}]"#).unwrap();

        let records = read_airports(&path).await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["iataCode"], "LHR");
    }

    #[tokio::test]
    async fn test_read_airports_keeps_non_object_elements() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("airports.json");
        std_fs::write(&path, r#"[{"iataCode":"WRO"}, "LHR"]"#).unwrap();

        let records = read_airports(&path).await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_read_airports_missing_file() {
        let dir = tempdir().unwrap();
        let result = read_airports(&dir.path().join("airports.json")).await;
        assert!(matches!(result, Err(ImportError::FileRead { .. })));
    }

    #[tokio::test]
    async fn test_read_airports_not_an_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("airports.json");
        std_fs::write(&path, r#"{"iataCode":"WRO"}"#).unwrap();

        let result = read_airports(&path).await;
        assert!(matches!(result, Err(ImportError::Decode { .. })));
    }
}
