//! Configuration and dependency initialization for the airport importer.
//!
//! Region and credentials come from the AWS shared configuration chain; only
//! the file and table are read here.

mod dependencies;

pub use dependencies::Dependencies;

use std::env;
use std::path::PathBuf;

use crate::errors::ImportError;

/// Default airports file.
const DEFAULT_AIRPORTS_FILE: &str = "./airports.json";

/// Default destination table.
const DEFAULT_AIRPORTS_TABLE: &str = "GRAPHQL-AIRPORTS";

/// Settings for one airport import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImporterConfig {
    /// JSON array of airport records.
    pub airports_file: PathBuf,
    /// Table the records are written to.
    pub table_name: String,
}

impl ImporterConfig {
    /// Read the configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AIRPORTS_FILE`: Airports file (default: ./airports.json)
    /// - `AIRPORTS_TABLE`: Destination table (default: GRAPHQL-AIRPORTS)
    pub fn from_env() -> Result<Self, ImportError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ImportError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let table_name =
            lookup("AIRPORTS_TABLE").unwrap_or_else(|| DEFAULT_AIRPORTS_TABLE.to_string());
        if table_name.trim().is_empty() {
            return Err(ImportError::config("AIRPORTS_TABLE must not be empty"));
        }

        Ok(Self {
            airports_file: PathBuf::from(
                lookup("AIRPORTS_FILE").unwrap_or_else(|| DEFAULT_AIRPORTS_FILE.to_string()),
            ),
            table_name,
        })
    }
}
