use std::env::VarError;

use anyhow::anyhow;
use reqwest::Url;

pub const DEFAULT_ROUTES_API_URL: &str = "https://routes.googleapis.com";
pub const DEFAULT_LISTEN_PORT: u16 = 3000;

pub const VARIABLES: &[&str] = &["ROUTES_API_KEY", "ROUTES_API_URL", "LISTEN_PORT"];

pub struct Config {
    /// Absent is allowed at startup; requests fail with a configuration error instead.
    pub routes_api_key: Option<String>,
    pub routes_api_url: Url,
    pub listen_port: u16,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        let routes_api_key = optional_env("ROUTES_API_KEY")?.filter(|key| !key.trim().is_empty());

        let routes_api_url = optional_env("ROUTES_API_URL")?
            .unwrap_or_else(|| DEFAULT_ROUTES_API_URL.to_string());
        let routes_api_url: Url = routes_api_url
            .parse()
            .map_err(|e| anyhow!("ROUTES_API_URL: {routes_api_url} is not a valid url: {e}"))?;

        let listen_port = match optional_env("LISTEN_PORT")? {
            Some(port) => port
                .parse::<u16>()
                .map_err(|e| anyhow!("LISTEN_PORT: {port} is not a valid port: {e}"))?,
            None => DEFAULT_LISTEN_PORT,
        };

        Ok(Self {
            routes_api_key,
            routes_api_url,
            listen_port,
        })
    }

    pub fn log(&self) {
        log::info!("Routes API url: {}", self.routes_api_url);
        log::info!("Listen port: {}", self.listen_port);

        if self.routes_api_key.is_some() {
            log::info!("Routes API key: set");
        } else {
            log::warn!("Routes API key: not set, route requests will fail until ROUTES_API_KEY is provided");
        }
    }
}

fn optional_env(name: &str) -> anyhow::Result<Option<String>> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(anyhow!("{name} value is not valid unicode")),
    }
}
