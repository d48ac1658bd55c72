//! # Airport Importer
//!
//! Seeds the airports table of the flights backend. Every element of the
//! airports file is written, untransformed, as one item of a DynamoDB table.
//!
//! ## Modules
//!
//! - [`config`]: Configuration and dependency initialization
//! - [`importer`]: Reads the airports file and writes it record by record
//! - [`marshal`]: JSON to DynamoDB attribute value conversion
//! - [`store`]: Key-value store abstraction and the DynamoDB implementation
//! - [`errors`]: Error types for the importer

pub mod config;
pub mod errors;
pub mod importer;
pub mod marshal;
pub mod store;

pub use config::{Dependencies, ImporterConfig};
pub use errors::ImportError;
pub use importer::AirportImporter;
