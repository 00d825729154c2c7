use futures::executor::block_on;

use super::*;
use crate::net::testing::FakeTransport;
use crate::net::transport::Method;
use crate::util::storage::MemoryStore;

fn api<'a>(transport: &'a FakeTransport, access: Option<&str>) -> ApiClient<&'a FakeTransport> {
    ApiClient::new(transport, "/api", access.map(str::to_owned))
}

fn login_body(role: &str) -> serde_json::Value {
    serde_json::json!({
        "user": { "id": 11, "name": "Ada", "email": "ada@example.com", "role": role },
        "access_token": "acc-11",
        "refresh_token": "ref-11"
    })
}

fn session(role: Role) -> Session {
    Session {
        user: User { id: 1, name: "Old".to_owned(), email: "old@example.com".to_owned(), username: None, role },
        access: "old-acc".to_owned(),
        refresh: "old-ref".to_owned(),
    }
}

// =============================================================
// AuthState basics
// =============================================================

#[test]
fn default_state_is_logged_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.access_token(), None);
}

#[test]
fn restoring_state_is_loading() {
    assert!(AuthState::restoring().loading);
}

#[test]
fn session_serializes_flat() {
    let value = serde_json::to_value(session(Role::Employer)).unwrap();
    assert_eq!(value["role"], "employer");
    assert_eq!(value["access"], "old-acc");
    assert_eq!(value["refresh"], "old-ref");
    assert!(value.get("user").is_none());
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn restore_without_stored_session_is_logged_out() {
    let store = MemoryStore::default();
    let state = AuthState::restore(&store);
    assert!(!state.loading);
    assert!(state.session.is_none());
}

#[test]
fn persist_then_restore_round_trips_session() {
    let store = MemoryStore::default();
    let mut state = AuthState::default();
    state.sign_in(session(Role::JobSeeker));
    state.persist(&store);

    let restored = AuthState::restore(&store);
    assert_eq!(restored.session, Some(session(Role::JobSeeker)));
}

#[test]
fn logout_clears_memory_and_storage() {
    let store = MemoryStore::default();
    let mut state = AuthState::default();
    state.sign_in(session(Role::JobSeeker));
    state.persist(&store);
    assert!(store.get(SESSION_KEY).is_some());

    state.sign_out();
    state.persist(&store);
    assert!(state.session.is_none());
    assert_eq!(store.get(SESSION_KEY), None);
}

#[test]
fn persist_is_skipped_while_restoring() {
    let store = MemoryStore::default();
    store.set(SESSION_KEY, &serde_json::to_string(&session(Role::Admin)).unwrap());
    AuthState::restoring().persist(&store);
    assert!(store.get(SESSION_KEY).is_some());
}

#[test]
fn corrupt_stored_session_reads_as_logged_out() {
    let store = MemoryStore::default();
    store.set(SESSION_KEY, "{\"id\":");
    assert!(AuthState::restore(&store).session.is_none());
}

#[test]
fn last_role_defaults_and_round_trips() {
    let store = MemoryStore::default();
    assert_eq!(load_last_role(&store), Role::JobSeeker);
    save_last_role(&store, Role::Employer);
    assert_eq!(store.get(LAST_ROLE_KEY).as_deref(), Some("employer"));
    assert_eq!(load_last_role(&store), Role::Employer);
    store.set(LAST_ROLE_KEY, "wizard");
    assert_eq!(load_last_role(&store), Role::JobSeeker);
}

#[test]
fn admin_tab_is_login_only() {
    assert!(LOGIN_ROLES.contains(&Role::Admin));
    assert!(!SIGNUP_ROLES.contains(&Role::Admin));
    assert_eq!(signup_role(Role::Admin), Role::JobSeeker);
    assert_eq!(signup_role(Role::Employer), Role::Employer);
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_builds_session_and_later_calls_carry_bearer() {
    let transport = FakeTransport::new().respond(200, login_body("job_seeker"));
    let mut state = AuthState::default();
    let session = block_on(login(&api(&transport, None), "ada@example.com", "secret1", Role::JobSeeker)).unwrap();
    state.sign_in(session);

    assert_eq!(state.user().map(|u| u.id), Some(11));
    assert_eq!(state.access_token(), Some("acc-11"));
    assert_eq!(state.session.as_ref().map(|s| s.refresh.as_str()), Some("ref-11"));

    let follow_up = api(&transport, state.access_token()).request(Method::Get, "/applications/");
    assert_eq!(follow_up.authorization().as_deref(), Some("Bearer acc-11"));
}

#[test]
fn login_failure_reports_server_message_and_keeps_prior_session() {
    let transport = FakeTransport::new().respond(401, serde_json::json!({ "message": "Invalid credentials" }));
    let mut state = AuthState::default();
    state.sign_in(session(Role::Employer));

    let result = block_on(login(&api(&transport, None), "x@y.co", "badpass", Role::Employer));
    assert_eq!(result, Err(AuthError::Login("Invalid credentials".to_owned())));
    assert_eq!(state.session, Some(session(Role::Employer)));
}

#[test]
fn login_failure_without_message_uses_default() {
    let transport = FakeTransport::new().respond(500, serde_json::Value::Null);
    let result = block_on(login(&api(&transport, None), "x@y.co", "secret1", Role::JobSeeker));
    assert_eq!(result.unwrap_err().to_string(), "Login failed");
}

#[test]
fn login_offline_reports_backend_offline() {
    let transport = FakeTransport::new().fail_network();
    let result = block_on(login(&api(&transport, None), "x@y.co", "secret1", Role::JobSeeker));
    assert_eq!(result, Err(AuthError::Login("Backend offline".to_owned())));
}

// =============================================================
// Signup
// =============================================================

fn signup_form() -> SignupForm {
    SignupForm {
        full_name: "Ada Lovelace".to_owned(),
        phone: String::new(),
        email: "ada@example.com".to_owned(),
        password: "secret1".to_owned(),
        role: Role::JobSeeker,
    }
}

#[test]
fn signup_auto_logs_in_with_returned_email() {
    let transport = FakeTransport::new()
        .respond(201, serde_json::json!({ "email": "canonical@example.com" }))
        .respond(200, login_body("job_seeker"));
    let session = block_on(signup(&api(&transport, None), &signup_form())).unwrap();
    assert_eq!(session.access, "acc-11");

    let sent = transport.sent();
    assert_eq!(sent[0].url, "/api/auth/register");
    assert_eq!(sent[1].url, "/api/auth/login");
    assert_eq!(sent[1].body.as_ref().unwrap()["username"], "canonical@example.com");
    assert_eq!(sent[1].body.as_ref().unwrap()["password"], "secret1");
}

#[test]
fn signup_falls_back_to_form_email() {
    let transport = FakeTransport::new()
        .respond(201, serde_json::json!({}))
        .respond(200, login_body("job_seeker"));
    block_on(signup(&api(&transport, None), &signup_form())).unwrap();
    assert_eq!(transport.sent()[1].body.as_ref().unwrap()["username"], "ada@example.com");
}

#[test]
fn signup_rejection_is_a_signup_error() {
    let transport = FakeTransport::new().respond(409, serde_json::json!({ "message": "Email taken" }));
    let result = block_on(signup(&api(&transport, None), &signup_form()));
    assert_eq!(result, Err(AuthError::Signup("Email taken".to_owned())));
    assert_eq!(transport.sent().len(), 1);
}

#[test]
fn signup_rejection_without_message_uses_default() {
    let transport = FakeTransport::new().respond(400, serde_json::Value::Null);
    let result = block_on(signup(&api(&transport, None), &signup_form()));
    assert_eq!(result, Err(AuthError::Signup("Signup failed".to_owned())));
}

#[test]
fn signup_then_failed_auto_login_is_a_failure() {
    let transport = FakeTransport::new()
        .respond(201, serde_json::json!({ "email": "ada@example.com" }))
        .respond(401, serde_json::json!({ "message": "Account pending approval" }));
    let result = block_on(signup(&api(&transport, None), &signup_form()));
    assert_eq!(result, Err(AuthError::Login("Account pending approval".to_owned())));
}
