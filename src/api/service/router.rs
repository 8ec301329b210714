use axum::routing::{get, post};

use super::State;
use super::endpoints::{compute_route, health};
use crate::api::routes_api::RoutesApi;

pub fn router<A>(state: State<A>) -> axum::Router
where
    A: RoutesApi + Clone + 'static,
{
    axum::Router::new()
        .route("/api/compute-route", post(compute_route::<A>))
        .route("/health", get(health))
        .with_state(state)
}
