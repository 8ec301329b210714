use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::RoutesApi;
use super::types::{ComputeRoutesRequest, ComputeRoutesResponse};
use crate::error::RouteError;

/// Test double that counts calls and answers with a canned body.
#[derive(Clone)]
pub struct StubRoutesApi {
    calls: Arc<AtomicUsize>,
    last_request: Arc<Mutex<Option<ComputeRoutesRequest>>>,
    reply: Reply,
}

#[derive(Clone)]
enum Reply {
    Body(serde_json::Value),
    Upstream(u16, String),
}

impl StubRoutesApi {
    pub fn returning(body: serde_json::Value) -> Self {
        Self {
            calls: Arc::default(),
            last_request: Arc::default(),
            reply: Reply::Body(body),
        }
    }

    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            calls: Arc::default(),
            last_request: Arc::default(),
            reply: Reply::Upstream(status, message.to_string()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ComputeRoutesRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

impl RoutesApi for StubRoutesApi {
    async fn compute_routes(
        &self,
        _api_key: &str,
        request: &ComputeRoutesRequest,
    ) -> Result<ComputeRoutesResponse, RouteError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        match &self.reply {
            Reply::Body(body) => Ok(serde_json::from_value(body.clone())?),
            Reply::Upstream(status, message) => Err(RouteError::Upstream {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
