//! Core types shared across the route indexer crates.

pub mod route_record;
