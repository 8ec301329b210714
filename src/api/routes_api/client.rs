use anyhow::anyhow;
use reqwest::Url;

use super::RoutesApi;
use super::types::*;
use crate::error::{RouteError, UPSTREAM_FALLBACK_MESSAGE};

pub const COMPUTE_ROUTES_PATH: &str = "/directions/v2:computeRoutes";

pub const API_KEY_HEADER: &str = "X-Goog-Api-Key";
pub const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";

/// Only the fields the normalizer reads. The service bills by field, so this is not optional.
pub const FIELD_MASK: &str = "routes.distanceMeters,\
routes.duration,\
routes.staticDuration,\
routes.polyline.encodedPolyline,\
routes.optimizedIntermediateWaypointIndex,\
routes.legs.steps.navigationInstruction,\
routes.legs.steps.distanceMeters,\
routes.legs.steps.staticDuration";

#[derive(Clone)]
pub struct Client {
    inner: reqwest::Client,
    base: Url,
}

impl Client {
    pub fn new(base: &str) -> anyhow::Result<Self> {
        let base: Url = base
            .parse()
            .map_err(|e| anyhow!("{} is not a valid url: {}", base, e))?;

        Ok(Self::from_url(base))
    }

    pub fn from_url(base: Url) -> Self {
        Self::with_http_client(reqwest::Client::new(), base)
    }

    pub fn with_http_client(inner: reqwest::Client, base: Url) -> Self {
        Self { inner, base }
    }
}

impl RoutesApi for Client {
    async fn compute_routes(
        &self,
        api_key: &str,
        request: &ComputeRoutesRequest,
    ) -> Result<ComputeRoutesResponse, RouteError> {
        let url = self
            .base
            .join(COMPUTE_ROUTES_PATH)
            .map_err(|e| RouteError::Transport(anyhow!("error joining url: {e}")))?;

        log::debug!(
            "Calling routes API with {} intermediates",
            request.intermediates.len()
        );

        let response = self
            .inner
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .header(FIELD_MASK_HEADER, FIELD_MASK)
            .json(request)
            .send()
            .await
            .inspect_err(|e| log::error!("Failed to send routes API request: {e}"))?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorPayload>(&text)
                .ok()
                .and_then(|payload| payload.error.message)
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| UPSTREAM_FALLBACK_MESSAGE.to_string());

            log::error!("Routes API returned {status}: {text}");

            return Err(RouteError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let routes: ComputeRoutesResponse = serde_json::from_str(&text).inspect_err(|e| {
            log::error!("Failed to parse routes API response: {e}. Body: {text}");
        })?;

        Ok(routes)
    }
}
