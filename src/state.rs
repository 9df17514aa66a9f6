//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! console keeps no data of its own; it only holds the pooled HTTP client
//! and the backend origin that API calls are forwarded to.

use std::sync::Arc;
use std::time::Duration;

use crate::config::HostConfig;

/// Clone is required by Axum; the client is internally reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: Arc<str>,
}

impl AppState {
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend_timeout_secs))
            .build()?;
        Ok(Self::with_client(http, &config.backend_url))
    }

    pub fn with_client(http: reqwest::Client, backend_url: &str) -> Self {
        Self { http, backend_url: Arc::from(backend_url.trim_end_matches('/')) }
    }
}
