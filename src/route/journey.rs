use crate::api::TripRequest;

pub const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir";

/// Directions link visiting the waypoints in `order`.
///
/// Indices past the waypoint list are skipped. An empty order keeps the
/// submitted order. The destination is only appended when one was given.
pub fn journey_url(trip: &TripRequest, order: &[usize]) -> String {
    let mut url = format!(
        "{DIRECTIONS_BASE}/{},{}",
        trip.origin.point.lat, trip.origin.point.lng
    );

    let waypoints: Vec<_> = if order.is_empty() {
        trip.waypoints.iter().collect()
    } else {
        order.iter().filter_map(|&i| trip.waypoints.get(i)).collect()
    };

    for waypoint in waypoints {
        url.push_str(&format!("/{},{}", waypoint.point.lat, waypoint.point.lng));
    }

    if let Some(destination) = &trip.destination {
        url.push_str(&format!(
            "/{},{}",
            destination.point.lat, destination.point.lng
        ));
    }

    url
}
