use axum::http::StatusCode;
use thiserror::Error;

pub const TRANSPORT_MESSAGE: &str = "Failed to reach routes API";
pub const UPSTREAM_FALLBACK_MESSAGE: &str = "Routes API failed";

#[derive(Error, Debug)]
pub enum RouteError {
    /// The trip itself is unusable; the caller can fix it.
    #[error("{0}")]
    Validation(String),

    #[error("Missing routes API key")]
    Configuration,

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("Failed to reach routes API: {0}")]
    Transport(#[source] anyhow::Error),

    #[error("No route found")]
    NoRouteFound,
}

impl RouteError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::Transport(_) => StatusCode::BAD_GATEWAY,
            Self::NoRouteFound => StatusCode::NOT_FOUND,
        }
    }

    /// Message safe to hand back to the caller.
    pub fn public_message(&self) -> String {
        match self {
            Self::Transport(_) => TRANSPORT_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for RouteError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.into())
    }
}

impl From<serde_json::Error> for RouteError {
    fn from(value: serde_json::Error) -> Self {
        Self::Transport(value.into())
    }
}
