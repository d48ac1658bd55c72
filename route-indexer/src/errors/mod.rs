//! Error types for the route indexer ingest.

use std::path::Path;

use route_indexer_repository::SearchIndexError;
use thiserror::Error;

/// Errors that can occur in the route indexer ingest.
///
/// Every variant is fatal to the run: the orchestrator stops at the first one
/// and hands it to `main`.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The routes directory does not exist or cannot be listed.
    #[error("Couldn't load files from {path}: {message}")]
    DirectoryRead { path: String, message: String },

    /// A listed entry could not be read as a file.
    #[error("Couldn't read {path}: {message}")]
    FileRead { path: String, message: String },

    /// A route file is not a JSON array of route objects.
    #[error("Couldn't decode {path}: {message}")]
    Decode { path: String, message: String },

    /// A route has no flight legs, so its endpoints cannot be derived.
    ///
    /// `path` is filled in once the failing file is known.
    #[error("Route {position}{} has no flight legs", location_suffix(.path))]
    Precondition {
        path: Option<String>,
        position: usize,
    },

    /// The search backend is unreachable or rejected the connection.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The bulk submission itself failed.
    #[error("Got error on uploading data: {0}")]
    BatchTransport(String),

    /// The bulk submission succeeded but some documents were rejected.
    #[error("{failed} of {total} documents were rejected")]
    DocumentsRejected { failed: usize, total: usize },

    /// A route could not be serialised into a document.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl IngestError {
    /// Create a directory read error.
    pub fn directory_read(path: &Path, message: impl Into<String>) -> Self {
        Self::DirectoryRead {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create a file read error.
    pub fn file_read(path: &Path, message: impl Into<String>) -> Self {
        Self::FileRead {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create a decode error.
    pub fn decode(path: &Path, message: impl Into<String>) -> Self {
        Self::Decode {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create a precondition error for the route at `position`.
    pub fn precondition(position: usize) -> Self {
        Self::Precondition {
            path: None,
            position,
        }
    }

    /// Attach the file being processed to an error that does not name one yet.
    pub fn in_file(self, file: &Path) -> Self {
        match self {
            Self::Precondition {
                path: None,
                position,
            } => Self::Precondition {
                path: Some(file.display().to_string()),
                position,
            },
            other => other,
        }
    }

    /// Create a batch transport error.
    pub fn batch_transport(msg: impl Into<String>) -> Self {
        Self::BatchTransport(msg.into())
    }
}

impl From<SearchIndexError> for IngestError {
    fn from(err: SearchIndexError) -> Self {
        match err {
            SearchIndexError::ConnectionError(msg) => Self::Connection(msg),
            other => Self::BatchTransport(other.to_string()),
        }
    }
}

fn location_suffix(path: &Option<String>) -> String {
    path.as_ref()
        .map(|p| format!(" in {}", p))
        .unwrap_or_default()
}
