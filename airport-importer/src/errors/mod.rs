//! Error types for the airport importer.

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while importing airports.
///
/// All of them end the run.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The airports file could not be read.
    #[error("Couldn't read {path}: {message}")]
    FileRead { path: String, message: String },

    /// The airports file is not a JSON array.
    #[error("Couldn't decode {path}: {message}")]
    Decode { path: String, message: String },

    /// A record could not be turned into a table item.
    #[error("Got error marshalling map at record {position}: {message}")]
    Marshal { position: usize, message: String },

    /// The store rejected a write.
    #[error("Got error calling PutItem: {0}")]
    PutItem(String),
}

impl ImportError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
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

    /// Create a marshal error.
    pub fn marshal(position: usize, message: impl Into<String>) -> Self {
        Self::Marshal {
            position,
            message: message.into(),
        }
    }

    /// Create a put item error.
    pub fn put_item(msg: impl Into<String>) -> Self {
        Self::PutItem(msg.into())
    }
}
