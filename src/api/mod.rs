use crate::error::RouteError;

pub mod routes_api;
pub mod service;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub point: LatLng,
    pub label: String,
}

impl Place {
    pub fn new(point: LatLng, label: impl Into<String>) -> Self {
        Self {
            point,
            label: label.into(),
        }
    }
}

/// Origin, optional destination and waypoints in the order the user entered them.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub origin: Place,
    pub destination: Option<Place>,
    pub waypoints: Vec<Place>,
}

impl TripRequest {
    pub fn validate(&self) -> Result<(), RouteError> {
        if !self.origin.point.is_valid() {
            return Err(RouteError::validation(
                "Origin is required and must include lat/lng",
            ));
        }

        if let Some(destination) = &self.destination {
            if !destination.point.is_valid() {
                return Err(RouteError::validation(
                    "Destination must include valid lat/lng",
                ));
            }
        }

        if let Some(index) = self.waypoints.iter().position(|w| !w.point.is_valid()) {
            return Err(RouteError::validation(format!(
                "Waypoint {index} must include valid lat/lng"
            )));
        }

        Ok(())
    }

    /// A missing destination means a round trip.
    pub fn effective_destination(&self) -> &Place {
        self.destination.as_ref().unwrap_or(&self.origin)
    }
}
