//! Route document types for the search index.
//!
//! A route is one journey made of an ordered sequence of flight legs. The
//! order of `flights` is chronological: the first leg's departure airport and
//! the last leg's arrival airport are the journey endpoints.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of journey, derived from the number of legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlightType {
    /// Exactly one leg.
    Direct,
    /// Two or more legs.
    ConnectingFlight,
}

impl FlightType {
    /// Derive the flight type from a leg count.
    ///
    /// This is a total function of the count alone; airports and times never
    /// influence it.
    pub fn from_leg_count(legs: usize) -> Self {
        if legs == 1 {
            Self::Direct
        } else {
            Self::ConnectingFlight
        }
    }

    /// The wire representation used in indexed documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "DIRECT",
            Self::ConnectingFlight => "CONNECTING_FLIGHT",
        }
    }
}

impl fmt::Display for FlightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flight leg of a route. Never modified after decoding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightLeg {
    #[serde(default, deserialize_with = "null_as_default")]
    pub arrival_airport_iata_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub arrival_date_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub departure_airport_iata_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub departure_date_time: String,
}

/// A route document as decoded from a route file and sent to the index.
///
/// # Fields
///
/// - `arrival_date_time`, `departure_date_time`, `duration`: opaque strings, passed through
/// - `flight_type`: derived from the leg count, never read from input
/// - `start_airport`, `final_airport`: derived from the first and last legs
/// - `flights`: the legs in chronological order
///
/// Missing fields (and `null`s) decode to their zero values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub arrival_date_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub departure_date_time: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: String,
    #[serde(skip_deserializing, serialize_with = "serialize_flight_type")]
    pub flight_type: Option<FlightType>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_airport: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub final_airport: String,
    #[serde(default, deserialize_with = "null_elements_as_default")]
    pub flights: Vec<FlightLeg>,
}

impl RouteRecord {
    /// Create a route from its legs, with every other field at its zero value.
    pub fn with_flights(flights: Vec<FlightLeg>) -> Self {
        Self {
            flights,
            ..Default::default()
        }
    }

    /// The first leg of the journey, if any.
    pub fn first_leg(&self) -> Option<&FlightLeg> {
        self.flights.first()
    }

    /// The last leg of the journey, if any.
    pub fn last_leg(&self) -> Option<&FlightLeg> {
        self.flights.last()
    }
}

impl FlightLeg {
    /// Create a leg between two airports with empty timestamps.
    pub fn between(departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        Self {
            departure_airport_iata_code: departure.into(),
            arrival_airport_iata_code: arrival.into(),
            ..Default::default()
        }
    }
}

/// Decode the contents of one route file: a JSON array of route objects.
///
/// One malformed record fails the whole array. A `null` element decodes as an
/// empty route.
pub fn decode_routes(bytes: &[u8]) -> Result<Vec<RouteRecord>, serde_json::Error> {
    let routes: Vec<Option<RouteRecord>> = serde_json::from_slice(bytes)?;
    Ok(routes.into_iter().map(Option::unwrap_or_default).collect())
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_elements_as_default<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let elements = Option::<Vec<Option<T>>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(elements.into_iter().map(Option::unwrap_or_default).collect())
}

// Not yet enriched serialises as "".
fn serialize_flight_type<S>(value: &Option<FlightType>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.map(|t| t.as_str()).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_full_route() {
        let raw = br#"[{
            "arrivalDateTime": "2018-06-01T12:30",
            "departureDateTime": "2018-06-01T09:05",
            "duration": "3h25m",
            "flights": [
                {
                    "arrivalAirportIataCode": "FRA",
                    "arrivalDateTime": "2018-06-01T10:40",
                    "departureAirportIataCode": "WRO",
                    "departureDateTime": "2018-06-01T09:05"
                },
                {
                    "arrivalAirportIataCode": "JFK",
                    "arrivalDateTime": "2018-06-01T12:30",
                    "departureAirportIataCode": "FRA",
                    "departureDateTime": "2018-06-01T11:15"
                }
            ]
        }]"#;

        let routes = decode_routes(raw).unwrap();
        assert_eq!(routes.len(), 1);

        let route = &routes[0];
        assert_eq!(route.duration, "3h25m");
        assert_eq!(route.flights.len(), 2);
        assert_eq!(route.flights[0].departure_airport_iata_code, "WRO");
        assert_eq!(route.flights[1].arrival_airport_iata_code, "JFK");
        assert_eq!(route.flight_type, None);
    }

    #[test]
    fn test_decode_empty_array() {
        let routes = decode_routes(b"[]").unwrap();
        assert!(routes.is_empty());
    }

    #[test]
    fn test_decode_missing_fields_are_zero_values() {
        let routes = decode_routes(br#"[{}, {"flights": null, "duration": null}]"#).unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0], RouteRecord::default());
        assert_eq!(routes[1], RouteRecord::default());
    }

    #[test]
    fn test_decode_null_elements_are_zero_values() {
        let routes = decode_routes(
            br#"[null, {"flights": [null, {"departureAirportIataCode": "WRO"}]}]"#,
        )
        .unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0], RouteRecord::default());
        assert_eq!(routes[1].flights.len(), 2);
        assert_eq!(routes[1].flights[0], FlightLeg::default());
        assert_eq!(routes[1].flights[1].departure_airport_iata_code, "WRO");
    }

    #[test]
    fn test_decode_ignores_input_flight_type() {
        let routes =
            decode_routes(br#"[{"flightType": "SOMETHING_ELSE", "flights": []}]"#).unwrap();
        assert_eq!(routes[0].flight_type, None);
    }

    #[test]
    fn test_decode_type_mismatch_fails_whole_file() {
        let raw = br#"[
            {"flights": [{"departureAirportIataCode": "WRO"}]},
            {"flights": [{"departureAirportIataCode": 42}]}
        ]"#;
        assert!(decode_routes(raw).is_err());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        assert!(decode_routes(br#"{"flights": []}"#).is_err());
        assert!(decode_routes(b"not json").is_err());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let mut route = RouteRecord::with_flights(vec![FlightLeg::between("WRO", "LHR")]);
        route.flight_type = Some(FlightType::Direct);
        route.start_airport = "WRO".to_string();
        route.final_airport = "LHR".to_string();

        let value = serde_json::to_value(&route).unwrap();
        assert_eq!(value["flightType"], json!("DIRECT"));
        assert_eq!(value["startAirport"], json!("WRO"));
        assert_eq!(value["finalAirport"], json!("LHR"));
        assert_eq!(value["flights"][0]["departureAirportIataCode"], json!("WRO"));
        assert_eq!(value["flights"][0]["arrivalAirportIataCode"], json!("LHR"));
        assert_eq!(value["arrivalDateTime"], json!(""));
    }

    #[test]
    fn test_serialize_unenriched_flight_type_is_empty() {
        let value = serde_json::to_value(RouteRecord::default()).unwrap();
        assert_eq!(value["flightType"], json!(""));
    }

    #[test]
    fn test_flight_type_from_leg_count() {
        assert_eq!(FlightType::from_leg_count(1), FlightType::Direct);
        assert_eq!(FlightType::from_leg_count(2), FlightType::ConnectingFlight);
        assert_eq!(FlightType::from_leg_count(7), FlightType::ConnectingFlight);
        assert_eq!(FlightType::ConnectingFlight.to_string(), "CONNECTING_FLIGHT");
    }
}
