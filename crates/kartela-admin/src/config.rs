//! Environment-driven app configuration.

use std::time::Duration;

use anyhow::{Context, Result};

/// Window geometry overrides (set by the session tiler, if any).
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowGeometry {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// App configuration read from `KARTELA_*` environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the registry server.
    pub api_url: String,
    /// Record id to edit; `None` opens a blank entry form.
    pub record: Option<String>,
    /// Timeout applied to every lookup and bootstrap request.
    pub lookup_timeout: Duration,
    pub window: WindowGeometry,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("KARTELA_API_URL").context("KARTELA_API_URL is not set")?;
        let record = std::env::var("KARTELA_RECORD").ok();
        let lookup_timeout = match std::env::var("KARTELA_LOOKUP_TIMEOUT_SECS").ok() {
            Some(raw) => Duration::from_secs(
                raw.parse()
                    .context("KARTELA_LOOKUP_TIMEOUT_SECS must be an integer")?,
            ),
            None => kartela_lookup::DEFAULT_TIMEOUT,
        };
        let window = WindowGeometry {
            x: env_f64("KARTELA_WIN_X"),
            y: env_f64("KARTELA_WIN_Y"),
            width: env_f64("KARTELA_WIN_W"),
            height: env_f64("KARTELA_WIN_H"),
        };
        Ok(Self {
            api_url,
            record,
            lookup_timeout,
            window,
        })
    }
}

fn env_f64(key: &str) -> Option<f64> {
    std::env::var(key).ok().and_then(|v| v.parse::<f64>().ok())
}
