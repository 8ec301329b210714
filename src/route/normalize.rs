use crate::api::routes_api::types::{
    ComputeRoutesResponse, DurationValue, PolylineValue, Route, Step,
};
use crate::error::RouteError;

use super::{RouteStep, RouteSummary};

/// Reshapes the raw service response into a [`RouteSummary`].
///
/// Only the first route is used. Missing fields fall back to zero or empty
/// values; the only failure is a response without any route.
pub fn normalize(raw: ComputeRoutesResponse) -> Result<RouteSummary, RouteError> {
    let route = raw.routes.into_iter().next().ok_or(RouteError::NoRouteFound)?;

    Ok(summarize(route))
}

fn summarize(route: Route) -> RouteSummary {
    let duration_seconds = seconds(route.duration.as_ref())
        .or_else(|| seconds(route.static_duration.as_ref()))
        .unwrap_or(0.0);

    let steps = route
        .legs
        .into_iter()
        .flat_map(|leg| leg.steps)
        .filter_map(flatten_step)
        .collect();

    RouteSummary {
        distance_meters: meters(route.distance_meters),
        duration_seconds,
        encoded_polyline: route
            .polyline
            .and_then(PolylineValue::into_encoded)
            .unwrap_or_default(),
        optimized_waypoint_order: route.optimized_intermediate_waypoint_index.unwrap_or_default(),
        steps,
    }
}

fn flatten_step(step: Step) -> Option<RouteStep> {
    let navigation = step.navigation_instruction.unwrap_or_default();
    let instruction = navigation.instructions.filter(|text| !text.trim().is_empty())?;

    Some(RouteStep {
        instruction,
        distance_meters: meters(step.distance_meters),
        duration_seconds: seconds(step.static_duration.as_ref()).unwrap_or(0.0),
        maneuver: navigation.maneuver.unwrap_or_default(),
    })
}

fn seconds(value: Option<&DurationValue>) -> Option<f64> {
    value.and_then(DurationValue::as_seconds)
}

fn meters(value: Option<f64>) -> u64 {
    match value {
        Some(m) if m.is_finite() && m > 0.0 => m.round() as u64,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> ComputeRoutesResponse {
        serde_json::from_value(value).unwrap()
    }

    fn step(text: &str) -> serde_json::Value {
        json!({ "navigationInstruction": { "instructions": text, "maneuver": "TURN_LEFT" } })
    }

    #[test]
    fn test_no_routes() {
        assert!(matches!(
            normalize(raw(json!({ "routes": [] }))),
            Err(RouteError::NoRouteFound)
        ));
        assert!(matches!(normalize(raw(json!({}))), Err(RouteError::NoRouteFound)));
    }

    #[test]
    fn test_empty_route_defaults() {
        let summary = normalize(raw(json!({ "routes": [{}] }))).unwrap();
        assert_eq!(summary, RouteSummary::default());
    }

    #[test]
    fn test_duration_shapes() {
        let text = normalize(raw(json!({ "routes": [{ "duration": "123s" }] }))).unwrap();
        assert_eq!(text.duration_seconds, 123.0);

        let structured =
            normalize(raw(json!({ "routes": [{ "duration": { "seconds": 123 } }] }))).unwrap();
        assert_eq!(structured.duration_seconds, 123.0);

        let neither = normalize(raw(json!({ "routes": [{ "duration": true }] }))).unwrap();
        assert_eq!(neither.duration_seconds, 0.0);
    }

    #[test]
    fn test_static_duration_fallback() {
        let summary = normalize(raw(json!({
            "routes": [{ "duration": "bogus", "staticDuration": "90s" }]
        })))
        .unwrap();
        assert_eq!(summary.duration_seconds, 90.0);

        let summary = normalize(raw(json!({
            "routes": [{ "duration": "30s", "staticDuration": "90s" }]
        })))
        .unwrap();
        assert_eq!(summary.duration_seconds, 30.0);
    }

    #[test]
    fn test_only_first_route_used() {
        let summary = normalize(raw(json!({
            "routes": [{ "distanceMeters": 1 }, { "distanceMeters": 2 }]
        })))
        .unwrap();
        assert_eq!(summary.distance_meters, 1);
    }

    #[test]
    fn test_steps_keep_leg_order() {
        let summary = normalize(raw(json!({
            "routes": [{
                "legs": [
                    { "steps": [step("A"), step("B")] },
                    { "steps": [step("C")] }
                ]
            }]
        })))
        .unwrap();

        let instructions: Vec<&str> = summary.steps.iter().map(|s| s.instruction.as_str()).collect();
        assert_eq!(instructions, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_steps_without_instruction_dropped() {
        let summary = normalize(raw(json!({
            "routes": [{
                "legs": [
                    { "steps": [step(""), step("Turn left"), { "distanceMeters": 40 }] },
                    {}
                ]
            }]
        })))
        .unwrap();

        assert_eq!(summary.steps.len(), 1);
        assert_eq!(summary.steps[0].instruction, "Turn left");
        assert_eq!(summary.steps[0].maneuver, "TURN_LEFT");
    }

    #[test]
    fn test_step_fields() {
        let summary = normalize(raw(json!({
            "routes": [{
                "legs": [{ "steps": [
                    {
                        "distanceMeters": 850,
                        "staticDuration": "75s",
                        "navigationInstruction": { "instructions": "Head north" }
                    },
                    {
                        "staticDuration": { "seconds": "12" },
                        "navigationInstruction": { "instructions": "Turn right", "maneuver": "TURN_RIGHT" }
                    }
                ]}]
            }]
        })))
        .unwrap();

        let first = &summary.steps[0];
        assert_eq!(first.distance_meters, 850);
        assert_eq!(first.duration_seconds, 75.0);
        assert_eq!(first.maneuver, "");

        let second = &summary.steps[1];
        assert_eq!(second.distance_meters, 0);
        assert_eq!(second.duration_seconds, 12.0);
    }

    #[test]
    fn test_flat_polyline_string() {
        let summary = normalize(raw(json!({
            "routes": [{ "distanceMeters": 5000, "duration": "600s", "polyline": "abc" }]
        })))
        .unwrap();

        assert_eq!(summary.distance_meters, 5000);
        assert_eq!(summary.duration_seconds, 600.0);
        assert_eq!(summary.encoded_polyline, "abc");
        assert!(summary.optimized_waypoint_order.is_empty());
        assert!(summary.steps.is_empty());
    }

    #[test]
    fn test_mismatched_types_default() {
        let summary = normalize(raw(json!({
            "routes": [{
                "distanceMeters": "5 km",
                "polyline": { "points": "abc" },
                "optimizedIntermediateWaypointIndex": "1,0",
                "legs": [{ "steps": [
                    {
                        "distanceMeters": 12.5,
                        "staticDuration": 30,
                        "navigationInstruction": { "instructions": "Keep right", "maneuver": 7 }
                    },
                    { "navigationInstruction": { "instructions": 42 } }
                ]}]
            }]
        })))
        .unwrap();

        assert_eq!(summary.distance_meters, 0);
        assert_eq!(summary.encoded_polyline, "");
        assert!(summary.optimized_waypoint_order.is_empty());

        assert_eq!(summary.steps.len(), 1);
        let step = &summary.steps[0];
        assert_eq!(step.instruction, "Keep right");
        assert_eq!(step.distance_meters, 13);
        assert_eq!(step.duration_seconds, 0.0);
        assert_eq!(step.maneuver, "");
    }

    #[test]
    fn test_negative_distance_clamped() {
        let summary = normalize(raw(json!({ "routes": [{ "distanceMeters": -5 }] }))).unwrap();
        assert_eq!(summary.distance_meters, 0);
    }
}
