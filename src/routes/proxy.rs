//! Same-origin forwarder for the moderation REST API.
//!
//! DESIGN
//! ======
//! The browser calls `/api/v1/...` on the console's own origin; this handler
//! replays the method, path, query string, `content-type` and body against
//! `{BACKEND_URL}/api/v1/...` and relays status, `content-type` and body
//! back unchanged. No retries; a transport failure is a `502`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, Method, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend unavailable: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "api forward failed");
        (StatusCode::BAD_GATEWAY, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Backend URL for a forwarded `path` (relative to `/api/v1/`) and raw query.
pub fn upstream_url(backend_url: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/api/v1/{}", backend_url.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(query);
    }
    url
}

/// `ANY /api/v1/{*path}`: forward to the backend.
pub async fn forward(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.backend_url, &path, query.as_deref());
    tracing::debug!(%method, %url, "forwarding api request");

    let mut request = state.http.request(method, &url);
    for name in [header::CONTENT_TYPE, header::ACCEPT] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(header::CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(header::CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(header::CONTENT_TYPE);
        }
    }
    Ok(response)
}
