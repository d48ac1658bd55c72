//! Route enricher implementation.
//!
//! Derives `flightType`, `startAirport` and `finalAirport` from a route's legs.

use route_indexer_shared::{FlightType, RouteRecord};
use tracing::{debug, instrument};

use crate::errors::IngestError;

/// Processor that fills in the derived fields of route documents.
///
/// Derived values always overwrite whatever the input carried, so enriching an
/// already enriched route is a no-op.
#[derive(Debug, Default, Clone, Copy)]
pub struct RouteEnricher;

impl RouteEnricher {
    /// Create a new route enricher.
    pub fn new() -> Self {
        Self
    }

    /// Enrich every route of one file.
    ///
    /// # Arguments
    ///
    /// * `routes` - The decoded routes, in file order
    ///
    /// # Returns
    ///
    /// The enriched routes, or `IngestError::Precondition` for the first route without legs.
    #[instrument(skip(self, routes), fields(route_count = routes.len()))]
    pub fn process_batch(&self, routes: Vec<RouteRecord>) -> Result<Vec<RouteRecord>, IngestError> {
        let enriched = routes
            .into_iter()
            .enumerate()
            .map(|(position, route)| self.enrich_at(position, route))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(enriched_count = enriched.len(), "Enriched route batch");
        Ok(enriched)
    }

    /// Enrich a single route.
    pub fn enrich(&self, route: RouteRecord) -> Result<RouteRecord, IngestError> {
        self.enrich_at(0, route)
    }

    fn enrich_at(&self, position: usize, mut route: RouteRecord) -> Result<RouteRecord, IngestError> {
        let (start, end) = match (route.first_leg(), route.last_leg()) {
            (Some(first), Some(last)) => (
                first.departure_airport_iata_code.clone(),
                last.arrival_airport_iata_code.clone(),
            ),
            _ => return Err(IngestError::precondition(position)),
        };

        route.flight_type = Some(FlightType::from_leg_count(route.flights.len()));
        route.start_airport = start;
        route.final_airport = end;
        Ok(route)
    }
}
