//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `BACKEND_URL`: moderation API origin, default `http://localhost:3001`
//! - `BACKEND_TIMEOUT_SECS`: per-request upstream timeout, default 30
//!
//! Leptos' own settings (`LEPTOS_SITE_ROOT` and friends) are read separately
//! by `leptos::prelude::get_configuration`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {value}")]
    InvalidPort { value: String },
    #[error("BACKEND_URL must be an http(s) origin, got: {value}")]
    InvalidBackendUrl { value: String },
    #[error("invalid BACKEND_TIMEOUT_SECS: {value}")]
    InvalidTimeout { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Backend origin without a trailing slash.
    pub backend_url: String,
    pub backend_timeout_secs: u64,
}

impl HostConfig {
    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset and empty values take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match get("PORT") {
            None => DEFAULT_PORT,
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value })?,
        };

        let backend_url = get("BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned());
        if !(backend_url.starts_with("http://") || backend_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBackendUrl { value: backend_url });
        }
        let backend_url = backend_url.trim_end_matches('/').to_owned();

        let backend_timeout_secs = match get("BACKEND_TIMEOUT_SECS") {
            None => DEFAULT_BACKEND_TIMEOUT_SECS,
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidTimeout { value })?,
        };

        Ok(Self { port, backend_url, backend_timeout_secs })
    }
}
