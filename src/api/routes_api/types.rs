use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::api::LatLng;

// --- Request ---

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComputeRoutesRequest {
    pub origin: Waypoint,
    pub destination: Waypoint,
    pub intermediates: Vec<Waypoint>,
    pub travel_mode: TravelMode,
    pub routing_preference: RoutingPreference,
    pub optimize_waypoint_order: bool,
    pub compute_alternative_routes: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Waypoint {
    pub location: Location,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub lat_lng: WireLatLng,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct WireLatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<LatLng> for Waypoint {
    fn from(value: LatLng) -> Self {
        Waypoint {
            location: Location {
                lat_lng: WireLatLng {
                    latitude: value.lat,
                    longitude: value.lng,
                },
            },
        }
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TravelMode {
    Drive,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingPreference {
    TrafficAware,
    TrafficAwareOptimal,
}

// --- Response ---

/// Upstream fields are untrusted: a value of the wrong type becomes the
/// field's default instead of failing the whole response.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

#[derive(Deserialize, Debug, Default)]
pub struct ComputeRoutesResponse {
    #[serde(default, deserialize_with = "lenient")]
    pub routes: Vec<Route>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(default, deserialize_with = "lenient")]
    pub distance_meters: Option<f64>,
    pub duration: Option<DurationValue>,
    pub static_duration: Option<DurationValue>,
    pub polyline: Option<PolylineValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub optimized_intermediate_waypoint_index: Option<Vec<usize>>,
    #[serde(default, deserialize_with = "lenient")]
    pub legs: Vec<Leg>,
}

/// Normally `{"encodedPolyline": "..."}`, occasionally the bare string.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum PolylineValue {
    Encoded {
        #[serde(rename = "encodedPolyline")]
        encoded_polyline: String,
    },
    Text(String),
    Other(serde_json::Value),
}

impl PolylineValue {
    pub fn into_encoded(self) -> Option<String> {
        match self {
            Self::Encoded { encoded_polyline } | Self::Text(encoded_polyline) => {
                Some(encoded_polyline)
            }
            Self::Other(_) => None,
        }
    }
}

#[derive(Deserialize, Debug, Default)]
pub struct Leg {
    #[serde(default, deserialize_with = "lenient")]
    pub steps: Vec<Step>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default, deserialize_with = "lenient")]
    pub distance_meters: Option<f64>,
    pub static_duration: Option<DurationValue>,
    #[serde(default, deserialize_with = "lenient")]
    pub navigation_instruction: Option<NavigationInstruction>,
}

#[derive(Deserialize, Debug, Default)]
pub struct NavigationInstruction {
    #[serde(default, deserialize_with = "lenient")]
    pub maneuver: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub instructions: Option<String>,
}

/// The service has been seen returning durations both as `"123s"` and as
/// `{"seconds": 123}`; anything else is kept so it can default to zero.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DurationValue {
    Text(String),
    Structured { seconds: Seconds },
    Other(serde_json::Value),
}

/// Protobuf JSON encodes int64 seconds as a string, so accept both.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Seconds {
    Number(f64),
    Text(String),
}

impl DurationValue {
    pub fn as_seconds(&self) -> Option<f64> {
        let seconds = match self {
            Self::Text(text) => parse_suffixed(text),
            Self::Structured { seconds } => match seconds {
                Seconds::Number(n) => Some(*n),
                Seconds::Text(text) => text.trim().parse().ok(),
            },
            Self::Other(_) => None,
        }?;

        (seconds.is_finite() && seconds >= 0.0).then_some(seconds)
    }
}

/// Parses a value like `"600s"`, `"12.5s"` or `"1e3s"`: the trailing unit
/// letters are dropped and the rest must be a number.
fn parse_suffixed(text: &str) -> Option<f64> {
    text.trim()
        .trim_end_matches(|c: char| c.is_ascii_alphabetic())
        .parse()
        .ok()
}

// --- Errors ---

#[derive(Deserialize, Debug)]
pub struct ErrorPayload {
    pub error: ErrorDetail,
}

#[derive(Deserialize, Debug)]
pub struct ErrorDetail {
    pub message: Option<String>,
}
