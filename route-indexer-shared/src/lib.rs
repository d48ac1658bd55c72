//! # Route Indexer Shared
//!
//! This crate defines the route documents that flow through the route indexer:
//! a journey (`RouteRecord`) made of one or more flight legs (`FlightLeg`).

pub mod types;

pub use types::route_record::{decode_routes, FlightLeg, FlightType, RouteRecord};
