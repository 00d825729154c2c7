//! Session store for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware pages. The session lives in a
//! `RwSignal<AuthState>` context; the app root mirrors every change into
//! localStorage and rehydrates from it once the browser side is live.
//!
//! DESIGN
//! ======
//! `login`/`signup` are plain async functions over an `ApiClient` so pages
//! apply their result to the signal themselves. Storage writes are skipped
//! while the state is still restoring, otherwise the first server-rendered
//! (logged out) snapshot would wipe a stored session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::net::api::ApiClient;
use crate::net::transport::Transport;
use crate::net::types::{LoginRequest, LoginResponse, Role, SignupForm, User};
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// localStorage key holding the serialized session.
pub const SESSION_KEY: &str = "user";

/// localStorage key holding the last selected login/signup role tab.
pub const LAST_ROLE_KEY: &str = "lastRole";

/// Authenticated identity plus opaque tokens. Stored flat, user fields first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(flatten)]
    pub user: User,
    pub access: String,
    #[serde(default)]
    pub refresh: String,
}

impl From<LoginResponse> for Session {
    fn from(resp: LoginResponse) -> Self {
        Self { user: resp.user, access: resp.access_token, refresh: resp.refresh_token }
    }
}

/// Authentication state tracking the current session and restore status.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// True until the stored session has been read in the browser.
    pub loading: bool,
}

impl AuthState {
    /// Initial state for server render and first hydration pass.
    pub fn restoring() -> Self {
        Self { session: None, loading: true }
    }

    /// Read the stored session. A missing or unreadable entry means logged out.
    pub fn restore(store: &impl KeyValueStore) -> Self {
        Self { session: load_json(store, SESSION_KEY), loading: false }
    }

    pub fn user(&self) -> Option<&User> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.access.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Replace any current session.
    pub fn sign_in(&mut self, session: Session) {
        self.session = Some(session);
        self.loading = false;
    }

    pub fn sign_out(&mut self) {
        self.session = None;
    }

    /// Browser API client carrying this session's bearer token.
    pub fn client(&self) -> ApiClient {
        ApiClient::browser(self.access_token().map(str::to_owned))
    }

    /// Mirror the session into `store`.
    pub fn persist(&self, store: &impl KeyValueStore) {
        if self.loading {
            return;
        }
        match &self.session {
            Some(session) => save_json(store, SESSION_KEY, session),
            None => store.remove(SESSION_KEY),
        }
    }
}

/// Why a login or signup attempt failed. Display is the inline message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("{0}")]
    Login(String),
    #[error("{0}")]
    Signup(String),
}

/// `POST /auth/login` and build the resulting session.
///
/// # Errors
///
/// Returns `AuthError::Login` carrying the server message or `"Login failed"`.
pub async fn login<T: Transport>(
    api: &ApiClient<T>,
    identifier: &str,
    password: &str,
    role: Role,
) -> Result<Session, AuthError> {
    let credentials = LoginRequest { username: identifier.to_owned(), password: password.to_owned(), role };
    match api.login(&credentials).await {
        Ok(resp) => Ok(resp.into()),
        Err(e) => {
            leptos::logging::warn!("login failed: {e}");
            Err(AuthError::Login(e.user_message("Login failed")))
        }
    }
}

/// Register, then log in with the same credentials.
///
/// # Errors
///
/// Returns `AuthError::Signup` when registration is rejected, or the
/// `AuthError::Login` of the follow-up login.
pub async fn signup<T: Transport>(api: &ApiClient<T>, form: &SignupForm) -> Result<Session, AuthError> {
    let registered = match api.register(form).await {
        Ok(resp) => resp,
        Err(e) => {
            leptos::logging::warn!("signup failed: {e}");
            return Err(AuthError::Signup(e.user_message("Signup failed")));
        }
    };
    let email = registered
        .email
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| form.email.clone());
    login(api, &email, &form.password, form.role).await
}

/// Role tabs on the login page. Admin accounts sign in here but never sign up.
pub const LOGIN_ROLES: &[Role] = &[Role::JobSeeker, Role::Employer, Role::Admin];

/// Role tabs on the signup page.
pub const SIGNUP_ROLES: &[Role] = &[Role::JobSeeker, Role::Employer];

/// Initial signup tab: the last role if it is offered there, else job seeker.
pub fn signup_role(last: Role) -> Role {
    if SIGNUP_ROLES.contains(&last) { last } else { Role::JobSeeker }
}

/// Last role tab the visitor picked; defaults to job seeker.
pub fn load_last_role(store: &impl KeyValueStore) -> Role {
    store
        .get(LAST_ROLE_KEY)
        .and_then(|raw| Role::parse(&raw))
        .unwrap_or_default()
}

pub fn save_last_role(store: &impl KeyValueStore, role: Role) {
    store.set(LAST_ROLE_KEY, role.as_str());
}
