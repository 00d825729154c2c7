use futures::executor::block_on;

use super::*;
use crate::net::testing::FakeTransport;
use crate::net::types::Role;

fn client<'a>(transport: &'a FakeTransport, access: Option<&str>) -> ApiClient<&'a FakeTransport> {
    ApiClient::new(transport, "/api", access.map(str::to_owned))
}

// =============================================================
// Endpoint helpers
// =============================================================

#[test]
fn endpoint_helpers_format_expected_paths() {
    assert_eq!(jobs_endpoint(2, 9), "/jobs?page=2&limit=9");
    assert_eq!(seeker_jobs_endpoint(1, 10), "/jobseekers/jobs?page=1&limit=10");
    assert_eq!(job_endpoint(5), "/jobs/5");
    assert_eq!(withdraw_endpoint(5), "/applications/5");
    assert_eq!(application_status_endpoint(8), "/applications/8/status");
    assert_eq!(user_endpoint(3), "/users/3");
}

#[test]
fn join_url_avoids_double_slash() {
    assert_eq!(join_url("/api/", "/jobs"), "/api/jobs");
    assert_eq!(join_url("https://example.test/api", "/jobs"), "https://example.test/api/jobs");
}

#[test]
fn body_message_prefers_message_then_error() {
    assert_eq!(body_message(&serde_json::json!({ "message": "a", "error": "b" })), Some("a".to_owned()));
    assert_eq!(body_message(&serde_json::json!({ "error": "Already applied" })), Some("Already applied".to_owned()));
    assert_eq!(body_message(&serde_json::Value::Null), None);
}

// =============================================================
// Bearer injection
// =============================================================

#[test]
fn request_attaches_bearer_when_token_present() {
    let transport = FakeTransport::new();
    let req = client(&transport, Some("tok-1")).request(Method::Get, "/jobs");
    assert_eq!(req.url, "/api/jobs");
    assert_eq!(req.authorization().as_deref(), Some("Bearer tok-1"));
}

#[test]
fn request_omits_bearer_without_token() {
    let transport = FakeTransport::new();
    assert_eq!(client(&transport, None).request(Method::Get, "/jobs").authorization(), None);
    assert_eq!(client(&transport, Some("")).request(Method::Get, "/jobs").authorization(), None);
}

#[test]
fn every_sent_call_carries_bearer() {
    let transport = FakeTransport::new()
        .respond(200, serde_json::json!({ "name": "Ada" }))
        .respond(200, serde_json::json!([]))
        .respond(201, serde_json::json!({}));
    let api = client(&transport, Some("acc"));
    block_on(async {
        api.seeker_profile().await.unwrap();
        api.my_applications().await.unwrap();
        api.apply(4).await.unwrap();
    });
    let sent = transport.sent();
    assert_eq!(sent.len(), 3);
    assert!(sent.iter().all(|r| r.authorization().as_deref() == Some("Bearer acc")));
    assert_eq!(sent[2].method, Method::Post);
    assert_eq!(sent[2].body, Some(serde_json::json!({ "job_id": 4 })));
}

// =============================================================
// Error mapping
// =============================================================

#[test]
fn network_failure_maps_to_offline() {
    let transport = FakeTransport::new().fail_network();
    let err = block_on(client(&transport, None).jobs(1, 10)).unwrap_err();
    assert_eq!(err, ApiError::Offline);
    assert_eq!(err.user_message("Couldn't load jobs"), "Backend offline");
}

#[test]
fn proxy_bad_gateway_maps_to_offline() {
    let transport = FakeTransport::new().respond(502, serde_json::json!({ "message": "Backend offline" }));
    assert_eq!(block_on(client(&transport, None).jobs(1, 10)).unwrap_err(), ApiError::Offline);
}

#[test]
fn unauthorized_is_reported_without_refresh() {
    let transport = FakeTransport::new().respond(401, serde_json::json!({ "message": "token expired" }));
    let err = block_on(client(&transport, Some("stale")).seeker_profile()).unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.server_message(), Some("token expired"));
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn already_applied_surfaces_as_status_400() {
    let transport = FakeTransport::new().respond(400, serde_json::json!({ "error": "Already applied" }));
    let err = block_on(client(&transport, Some("acc")).apply(1)).unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 400,
            message: Some("Already applied".to_owned()),
            error: Some("Already applied".to_owned()),
        }
    );
}

#[test]
fn error_field_is_kept_apart_from_message() {
    let body = serde_json::json!({ "message": "Bad Request", "error": "Already applied" });
    let transport = FakeTransport::new().respond(400, body);
    let err = block_on(client(&transport, Some("acc")).apply(1)).unwrap_err();
    assert_eq!(err.server_message(), Some("Bad Request"));
    assert_eq!(err.error_field(), Some("Already applied"));
    assert_eq!(err.error_text("Failed to apply"), "Already applied");
}

#[test]
fn user_message_uses_fallback_without_server_text() {
    let err = ApiError::Status { status: 500, message: None, error: None };
    assert_eq!(err.user_message("Failed to post job"), "Failed to post job");
}

// =============================================================
// Payload handling
// =============================================================

#[test]
fn login_posts_credentials_and_parses_tokens() {
    let transport = FakeTransport::new().respond(
        200,
        serde_json::json!({
            "user": { "id": 1, "name": "Ada", "email": "ada@example.com", "role": "job_seeker" },
            "access_token": "a",
            "refresh_token": "r"
        }),
    );
    let creds = LoginRequest { username: "ada@example.com".to_owned(), password: "secret1".to_owned(), role: Role::JobSeeker };
    let resp = block_on(client(&transport, None).login(&creds)).unwrap();
    assert_eq!(resp.access_token, "a");
    let sent = transport.sent();
    assert_eq!(sent[0].url, "/api/auth/login");
    assert_eq!(sent[0].body.as_ref().unwrap()["username"], "ada@example.com");
}

#[test]
fn list_endpoints_treat_empty_body_as_no_items() {
    let transport = FakeTransport::new().respond(200, serde_json::Value::Null);
    assert!(block_on(client(&transport, Some("acc")).seeker_interviews()).unwrap().is_empty());
}

#[test]
fn malformed_body_is_decode_error() {
    let transport = FakeTransport::new().respond(200, serde_json::json!("nope"));
    assert!(matches!(block_on(client(&transport, None).job(1)), Err(ApiError::Decode(_))));
}

#[test]
fn all_jobs_unwraps_envelope() {
    let transport = FakeTransport::new().respond(200, serde_json::json!({ "jobs": [{ "id": 1 }], "total": 1 }));
    let jobs = block_on(client(&transport, Some("acc")).all_jobs()).unwrap();
    assert_eq!(jobs.len(), 1);
}

#[test]
fn status_update_sends_put_with_status_body() {
    let transport = FakeTransport::new().respond(200, serde_json::json!({}));
    block_on(client(&transport, Some("acc")).update_application_status(8, ApplicationStatus::Rejected)).unwrap();
    let sent = transport.sent();
    assert_eq!(sent[0].method, Method::Put);
    assert_eq!(sent[0].url, "/api/applications/8/status");
    assert_eq!(sent[0].body, Some(serde_json::json!({ "status": "rejected" })));
}
