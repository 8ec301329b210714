use super::RoutesApi;
use super::types::*;
use crate::api::TripRequest;
use crate::error::RouteError;
use crate::route::RouteSummary;
use crate::route::normalize::normalize;

/// Translates a trip into the service's request schema.
///
/// With waypoints the service is asked to reorder them, which it only allows
/// with the plain traffic-aware preference. Without waypoints there is nothing
/// to reorder, so the optimal preference is used instead.
pub fn build_request(trip: &TripRequest) -> ComputeRoutesRequest {
    let intermediates: Vec<Waypoint> = trip.waypoints.iter().map(|w| w.point.into()).collect();
    let optimize = !intermediates.is_empty();

    ComputeRoutesRequest {
        origin: trip.origin.point.into(),
        destination: trip.effective_destination().point.into(),
        intermediates,
        travel_mode: TravelMode::Drive,
        routing_preference: if optimize {
            RoutingPreference::TrafficAware
        } else {
            RoutingPreference::TrafficAwareOptimal
        },
        optimize_waypoint_order: optimize,
        compute_alternative_routes: false,
    }
}

#[derive(Clone)]
pub struct RouteAdapter<A> {
    api: A,
    api_key: Option<String>,
}

impl<A: RoutesApi> RouteAdapter<A> {
    pub fn new(api: A, api_key: Option<String>) -> Self {
        Self { api, api_key }
    }

    pub fn credential(&self) -> Result<&str, RouteError> {
        self.api_key.as_deref().ok_or(RouteError::Configuration)
    }

    /// One outbound call, no retry.
    pub async fn build_and_send(
        &self,
        trip: &TripRequest,
    ) -> Result<ComputeRoutesResponse, RouteError> {
        let api_key = self.credential()?;
        trip.validate()?;

        let request = build_request(trip);
        self.api.compute_routes(api_key, &request).await
    }

    pub async fn compute(&self, trip: &TripRequest) -> Result<RouteSummary, RouteError> {
        let raw = self.build_and_send(trip).await?;
        normalize(raw)
    }
}
