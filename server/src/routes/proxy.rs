//! `/api/*` reverse proxy to the REST backend.
//!
//! DESIGN
//! ======
//! Requests are buffered (bounded by `max_body_bytes`) and replayed against
//! `backend_url` with the `/api` prefix removed. Method, query, body and
//! end-to-end headers pass through unchanged in both directions. When the
//! backend cannot be reached the browser gets `502 {"message":"Backend offline"}`,
//! which the client maps to its offline error.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, to_bytes};
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

pub const API_PREFIX: &str = "/api";
pub const OFFLINE_MESSAGE: &str = "Backend offline";

/// Connection-scoped headers (RFC 9110 §7.6.1) that must not be forwarded.
const HOP_BY_HOP: [&str; 8] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The incoming body exceeded the limit or could not be read.
    #[error("request body rejected: {0}")]
    Body(String),

    /// The backend could not be reached or dropped the response.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            Self::Body(_) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(serde_json::json!({ "message": "Request body too large" })),
            )
                .into_response(),
            Self::Upstream(_) => {
                (StatusCode::BAD_GATEWAY, Json(serde_json::json!({ "message": OFFLINE_MESSAGE }))).into_response()
            }
        }
    }
}

/// Hop-by-hop headers plus `host`/`content-length`, which the outgoing
/// connection sets itself.
pub fn is_hop_by_hop(name: &HeaderName) -> bool {
    name == header::HOST || name == header::CONTENT_LENGTH || HOP_BY_HOP.contains(&name.as_str())
}

pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Backend URL for an incoming `/api/...` path and query.
pub fn upstream_url(backend_url: &str, path_and_query: &str) -> String {
    let rest = path_and_query.strip_prefix(API_PREFIX).unwrap_or(path_and_query);
    let backend = backend_url.trim_end_matches('/');
    if rest.starts_with('/') { format!("{backend}{rest}") } else { format!("{backend}/{rest}") }
}

/// `ANY /api/*`: replay the request against the backend.
///
/// # Errors
///
/// `ProxyError::Body` for oversized bodies, `ProxyError::Upstream` when the
/// backend is unreachable.
pub async fn forward(State(state): State<AppState>, request: Request) -> Result<Response, ProxyError> {
    let (parts, body) = request.into_parts();
    let path = parts.uri.path_and_query().map_or(parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.config.backend_url, path);
    let body = to_bytes(body, state.config.max_body_bytes)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    tracing::debug!(method = %parts.method, %url, "proxying api request");
    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, %url, "backend unreachable"))?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    if status.is_server_error() {
        tracing::warn!(%status, %url, "backend error response");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
