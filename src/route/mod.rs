use serde::Serialize;

pub mod display;
pub mod journey;
pub mod normalize;

/// Provider-independent route, always fully populated.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub distance_meters: u64,
    pub duration_seconds: f64,
    pub encoded_polyline: String,
    /// Indices into the submitted waypoints, in visiting order.
    pub optimized_waypoint_order: Vec<usize>,
    pub steps: Vec<RouteStep>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RouteStep {
    pub instruction: String,
    pub distance_meters: u64,
    pub duration_seconds: f64,
    pub maneuver: String,
}
