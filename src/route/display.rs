use serde::Serialize;

use super::{RouteStep, RouteSummary};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RouteDisplay {
    pub distance: String,
    pub duration: String,
    pub steps: Vec<StepDisplay>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StepDisplay {
    pub distance_text: String,
    pub duration_text: String,
}

impl From<&RouteSummary> for RouteDisplay {
    fn from(summary: &RouteSummary) -> Self {
        Self {
            distance: format!("{:.1} km", summary.distance_meters as f64 / 1000.0),
            duration: format!("{} mins", (summary.duration_seconds / 60.0).round()),
            steps: summary.steps.iter().map(StepDisplay::from).collect(),
        }
    }
}

impl From<&RouteStep> for StepDisplay {
    fn from(step: &RouteStep) -> Self {
        Self {
            distance_text: step_distance(step.distance_meters),
            duration_text: step_duration(step.duration_seconds),
        }
    }
}

// Empty strings for zero so the UI can hide the badge.
fn step_distance(meters: u64) -> String {
    match meters {
        0 => String::new(),
        m if m < 1000 => format!("{m}m"),
        m => format!("{:.1}km", m as f64 / 1000.0),
    }
}

fn step_duration(seconds: f64) -> String {
    if seconds <= 0.0 {
        String::new()
    } else if seconds < 60.0 {
        format!("{}s", seconds.round())
    } else {
        format!("{}min", (seconds / 60.0).round())
    }
}
