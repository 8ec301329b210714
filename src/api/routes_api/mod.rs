pub mod adapter;
pub mod client;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

use std::future::Future;

use crate::error::RouteError;

pub use adapter::{RouteAdapter, build_request};
pub use client::Client;
pub use types::{ComputeRoutesRequest, ComputeRoutesResponse};

/// Anything that can compute a route for an already-built request.
pub trait RoutesApi: Send + Sync {
    fn compute_routes(
        &self,
        api_key: &str,
        request: &ComputeRoutesRequest,
    ) -> impl Future<Output = Result<ComputeRoutesResponse, RouteError>> + Send;
}
