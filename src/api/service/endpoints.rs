use axum::extract::{Json, Request, State};
use uuid::Uuid;

use crate::api::routes_api::{RouteAdapter, RoutesApi};
use crate::error::RouteError;
use crate::route::display::RouteDisplay;
use crate::route::journey::journey_url;

use super::types::*;

pub type Result<T> = std::result::Result<T, ErrorResponse>;

pub const MAX_BODY_BYTES: usize = 64 * 1024;

pub async fn compute_route<A: RoutesApi>(
    State(adapter): State<RouteAdapter<A>>,
    request: Request,
) -> Result<Json<RouteEnvelope>> {
    let request_id = Uuid::new_v4();

    match compute(&adapter, request, request_id).await {
        Ok(envelope) => Ok(Json(envelope)),
        Err(e) => {
            log_failure(request_id, &e);
            Err(e.into())
        }
    }
}

async fn compute<A: RoutesApi>(
    adapter: &RouteAdapter<A>,
    request: Request,
    request_id: Uuid,
) -> std::result::Result<RouteEnvelope, RouteError> {
    // Credential first, so a bad body can never hide a missing key.
    adapter.credential()?;

    let body = axum::body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|e| RouteError::validation(format!("Failed to read request body: {e}")))?;

    let trip = parse_trip(&body)?;
    log::debug!(
        "[{request_id}] Computing route with {} waypoints (round trip: {})",
        trip.waypoints.len(),
        trip.destination.is_none()
    );

    let summary = adapter.compute(&trip).await?;
    log::info!(
        "[{request_id}] Route computed: {} m, {} s, {} steps, order {:?}",
        summary.distance_meters,
        summary.duration_seconds,
        summary.steps.len(),
        summary.optimized_waypoint_order
    );

    let entry = RouteEntry {
        display: RouteDisplay::from(&summary),
        journey_url: journey_url(&trip, &summary.optimized_waypoint_order),
        summary,
    };

    Ok(RouteEnvelope {
        routes: vec![entry],
    })
}

fn log_failure(request_id: Uuid, e: &RouteError) {
    match e {
        RouteError::Validation(_) | RouteError::NoRouteFound => {
            log::warn!("[{request_id}] {e}")
        }
        RouteError::Configuration => {
            log::warn!("[{request_id}] {e}, set ROUTES_API_KEY")
        }
        RouteError::Upstream { status, .. } => {
            log::error!("[{request_id}] Routes API failed with {status}: {e}")
        }
        RouteError::Transport(cause) => {
            log::error!("[{request_id}] {e} ({cause:#})")
        }
    }
}

pub async fn health() -> &'static str {
    "OK"
}
