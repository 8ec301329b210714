use serde::{Deserialize, Serialize};

use crate::api::{LatLng, Place, TripRequest};
use crate::error::RouteError;
use crate::route::RouteSummary;
use crate::route::display::RouteDisplay;

// --- Request ---

#[derive(Deserialize, Debug)]
pub struct TripBody {
    pub origin: Option<PlaceBody>,

    #[serde(default)]
    pub destination: Option<PlaceBody>,

    #[serde(default)]
    pub waypoints: Option<Vec<PlaceBody>>,
}

/// A place as the UI stores it; `id` and other extra fields are ignored.
#[derive(Deserialize, Debug)]
pub struct PlaceBody {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub label: Option<String>,
    pub address: Option<String>,
}

impl PlaceBody {
    fn into_place(self, missing: impl FnOnce() -> RouteError) -> Result<Place, RouteError> {
        let (Some(lat), Some(lng)) = (self.lat, self.lng) else {
            return Err(missing());
        };

        let label = self.label.or(self.address).unwrap_or_default();
        Ok(Place::new(LatLng::new(lat, lng), label))
    }
}

impl TryFrom<TripBody> for TripRequest {
    type Error = RouteError;

    fn try_from(body: TripBody) -> Result<Self, Self::Error> {
        let origin = body
            .origin
            .ok_or_else(origin_required)?
            .into_place(origin_required)?;

        let destination = body
            .destination
            .map(|d| {
                d.into_place(|| RouteError::validation("Destination must include lat/lng"))
            })
            .transpose()?;

        let waypoints = body
            .waypoints
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, w)| {
                w.into_place(|| RouteError::validation(format!("Waypoint {i} must include lat/lng")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let trip = TripRequest {
            origin,
            destination,
            waypoints,
        };
        trip.validate()?;

        Ok(trip)
    }
}

fn origin_required() -> RouteError {
    RouteError::validation("Origin is required and must include lat/lng")
}

pub fn parse_trip(body: &[u8]) -> Result<TripRequest, RouteError> {
    let body: TripBody = serde_json::from_slice(body)
        .map_err(|e| RouteError::validation(format!("Invalid request body: {e}")))?;

    body.try_into()
}

// --- Response ---

/// Same outer shape as the routing service: a `routes` list with one entry.
#[derive(Serialize, Debug)]
pub struct RouteEnvelope {
    pub routes: Vec<RouteEntry>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    #[serde(flatten)]
    pub summary: RouteSummary,
    pub display: RouteDisplay,
    pub journey_url: String,
}

#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip)]
    pub status: u16,
}
