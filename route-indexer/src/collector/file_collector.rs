//! Filesystem route source.
//!
//! Lists the direct entries of the routes directory and decodes each route file.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use route_indexer_shared::{decode_routes, RouteRecord};
use tokio::fs;
use tracing::{debug, instrument};

use crate::errors::IngestError;

/// Source of route files for the orchestrator.
#[async_trait]
pub trait RouteSource: Send + Sync {
    /// List the route files to process, in processing order.
    async fn list_files(&self) -> Result<Vec<PathBuf>, IngestError>;

    /// Read and decode the routes contained in one file.
    async fn read_routes(&self, path: &Path) -> Result<Vec<RouteRecord>, IngestError>;
}

/// Route source backed by one directory on disk.
#[derive(Debug, Clone)]
pub struct FileCollector {
    root: PathBuf,
}

impl FileCollector {
    /// Create a collector for the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl RouteSource for FileCollector {
    async fn list_files(&self) -> Result<Vec<PathBuf>, IngestError> {
        list_files(&self.root).await
    }

    async fn read_routes(&self, path: &Path) -> Result<Vec<RouteRecord>, IngestError> {
        read_routes(path).await
    }
}

/// List one path per direct entry of `dir`.
///
/// Entries are returned in the order the filesystem reports them. Nothing is
/// filtered: subdirectories are listed too and fail later, when read.
#[instrument]
pub async fn list_files(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| IngestError::directory_read(dir, e.to_string()))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| IngestError::directory_read(dir, e.to_string()))?
    {
        files.push(dir.join(entry.file_name()));
    }

    debug!(file_count = files.len(), "Listed route files");
    Ok(files)
}

/// Read one route file and decode its JSON array of routes.
#[instrument]
pub async fn read_routes(path: &Path) -> Result<Vec<RouteRecord>, IngestError> {
    let raw = fs::read(path)
        .await
        .map_err(|e| IngestError::file_read(path, e.to_string()))?;

    let routes = decode_routes(&raw).map_err(|e| IngestError::decode(path, e.to_string()))?;

    debug!(route_count = routes.len(), "Decoded route file");
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_list_files_one_path_per_entry() {
        let dir = tempdir().unwrap();
        std_fs::write(dir.path().join("a.json"), "[]").unwrap();
        std_fs::write(dir.path().join("b.txt"), "[]").unwrap();
        std_fs::create_dir(dir.path().join("nested")).unwrap();
        std_fs::write(dir.path().join("nested").join("c.json"), "[]").unwrap();

        let mut files = list_files(dir.path()).await.unwrap();
        files.sort();

        assert_eq!(
            files,
            vec![
                dir.path().join("a.json"),
                dir.path().join("b.txt"),
                dir.path().join("nested"),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_files_empty_directory() {
        let dir = tempdir().unwrap();
        let files = list_files(dir.path()).await.unwrap();
        assert!(files.is_empty());
    }

    #[tokio::test]
    async fn test_list_files_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("routes");

        let result = list_files(&missing).await;
        assert!(matches!(result, Err(IngestError::DirectoryRead { .. })));
    }

    #[tokio::test]
    async fn test_read_routes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("routes.json");
        std_fs::write(
            &path,
            r#"[{"flights":[{"departureAirportIataCode":"WRO","arrivalAirportIataCode":"LHR"}]}]"#,
        )
        .unwrap();

        let routes = read_routes(&path).await.unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].flights[0].arrival_airport_iata_code, "LHR");
    }

    #[tokio::test]
    async fn test_read_routes_malformed() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std_fs::write(&path, r#"[{"flights": "WRO"}]"#).unwrap();

        let result = read_routes(&path).await;
        assert!(matches!(result, Err(IngestError::Decode { .. })));
    }

    #[tokio::test]
    async fn test_read_routes_on_directory_entry() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");
        std_fs::create_dir(&nested).unwrap();

        let result = read_routes(&nested).await;
        assert!(matches!(result, Err(IngestError::FileRead { .. })));
    }

    #[tokio::test]
    async fn test_file_collector_uses_root() {
        let dir = tempdir().unwrap();
        std_fs::write(dir.path().join("a.json"), "[]").unwrap();

        let collector = FileCollector::new(dir.path());
        let files = collector.list_files().await.unwrap();

        assert_eq!(files, vec![dir.path().join("a.json")]);
        assert!(collector.read_routes(&files[0]).await.unwrap().is_empty());
    }
}
