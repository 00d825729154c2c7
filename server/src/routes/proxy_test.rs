use axum::Router;
use axum::http::{HeaderValue, Method, Uri};
use axum::routing::post;

use super::*;
use crate::config::HostConfig;
use crate::routes::api_routes;

/// Nothing listens here; only used where the backend is never hit.
const UNUSED_BACKEND: &str = "http://127.0.0.1:9";

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "method": method.as_str(),
        "uri": uri.to_string(),
        "authorization": headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok()),
        "proxy_authorization": headers.contains_key("proxy-authorization"),
        "body": body,
    }))
}

async fn already_applied() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(serde_json::json!({ "error": "Already applied" })))
}

fn backend() -> Router {
    Router::new().route("/applications", post(already_applied)).fallback(echo)
}

async fn proxy_for(backend_url: String) -> String {
    let config = HostConfig { backend_url, ..HostConfig::default() };
    serve(api_routes(AppState::new(config).unwrap())).await
}

// =============================================================
// Helpers
// =============================================================

#[test]
fn upstream_url_strips_api_prefix() {
    assert_eq!(upstream_url("http://b:8000", "/api/jobs?page=2&limit=9"), "http://b:8000/jobs?page=2&limit=9");
    assert_eq!(upstream_url("http://b:8000/", "/api/applications/"), "http://b:8000/applications/");
    assert_eq!(upstream_url("http://b:8000/v1", "/api"), "http://b:8000/v1/");
}

#[test]
fn hop_by_hop_headers_are_dropped() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::HOST, HeaderValue::from_static("localhost:3000"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let kept = forwardable_headers(&headers);
    assert_eq!(kept.len(), 2);
    assert!(kept.contains_key(header::AUTHORIZATION));
    assert!(kept.contains_key(header::CONTENT_TYPE));
}

#[test]
fn oversized_body_is_payload_too_large() {
    let err = ProxyError::Body("too big".to_owned());
    assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
}

// =============================================================
// End to end
// =============================================================

#[tokio::test]
async fn forwards_method_path_query_headers_and_body() {
    let proxy = proxy_for(serve(backend()).await).await;
    let resp = reqwest::Client::new()
        .put(format!("{proxy}/api/applications/8/status?x=1"))
        .header(header::AUTHORIZATION, "Bearer acc-1")
        .header("proxy-authorization", "Basic secret")
        .body(r#"{"status":"accepted"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["method"], "PUT");
    assert_eq!(body["uri"], "/applications/8/status?x=1");
    assert_eq!(body["authorization"], "Bearer acc-1");
    assert_eq!(body["proxy_authorization"], false);
    assert_eq!(body["body"], r#"{"status":"accepted"}"#);
}

#[tokio::test]
async fn passes_error_statuses_through() {
    let proxy = proxy_for(serve(backend()).await).await;
    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/applications"))
        .json(&serde_json::json!({ "job_id": 4 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Already applied");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let closed = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let dead = format!("http://{}", closed.local_addr().unwrap());
    drop(closed);

    let proxy = proxy_for(dead).await;
    let resp = reqwest::get(format!("{proxy}/api/jobs?page=1&limit=10")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "message": "Backend offline" }));
}

#[tokio::test]
async fn body_over_limit_is_rejected_before_forwarding() {
    let config = HostConfig { backend_url: serve(backend()).await, max_body_bytes: 16, ..HostConfig::default() };
    let proxy = serve(api_routes(AppState::new(config).unwrap())).await;
    let resp = reqwest::Client::new()
        .post(format!("{proxy}/api/jobs"))
        .body(vec![b'x'; 64])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn healthz_is_ok() {
    let proxy = proxy_for(UNUSED_BACKEND.to_owned()).await;
    let resp = reqwest::get(format!("{proxy}/healthz")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}
