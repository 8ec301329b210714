pub mod endpoints;
pub mod router;
pub mod types;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::api::routes_api::{RouteAdapter, RoutesApi};
use crate::error::RouteError;

#[derive(Clone)]
pub struct State<A> {
    pub adapter: RouteAdapter<A>,
}

impl<A: RoutesApi> State<A> {
    pub fn new(adapter: RouteAdapter<A>) -> Self {
        Self { adapter }
    }
}

impl<A: Clone> axum::extract::FromRef<State<A>> for RouteAdapter<A> {
    fn from_ref(input: &State<A>) -> Self {
        input.adapter.clone()
    }
}

impl IntoResponse for types::ErrorResponse {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<RouteError> for types::ErrorResponse {
    fn from(value: RouteError) -> Self {
        Self {
            error: value.public_message(),
            status: value.status().as_u16(),
        }
    }
}
