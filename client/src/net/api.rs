//! REST API client for the job-board backend.
//!
//! Every request built here passes through `ApiClient::request`, which attaches
//! `Authorization: Bearer <access>` when the client was created from a live
//! session. A 401 is logged and returned to the caller; there is no
//! refresh-token exchange.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics. Pages turn errors into
//! inline messages via `ApiError::user_message` with a call-site fallback.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::transport::{ApiRequest, ApiResponse, BrowserTransport, Method, Transport, TransportError};
use super::types::{
    AdminUser, Application, ApplicationStatus, Interview, InterviewRequest, Job, JobsPayload, LoginRequest,
    LoginResponse, NewJob, Profile, RegisterResponse, SignupForm, StatusUpdate,
};

/// Base path used when no build-time override is present.
pub const DEFAULT_API_BASE: &str = "/api";

/// Message shown when the backend cannot be reached.
pub const OFFLINE_MESSAGE: &str = "Backend offline";

/// API base path, overridable at build time with `JOBBOARD_API_BASE`.
pub fn api_base() -> &'static str {
    option_env!("JOBBOARD_API_BASE").unwrap_or(DEFAULT_API_BASE)
}

/// Errors surfaced by API calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend (or the host's proxy in front of it) is unreachable.
    #[error("Backend offline")]
    Offline,

    /// Non-2xx response. `message` is the body's `message` or `error` field;
    /// `error` is the `error` field alone.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String>, error: Option<String> },

    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The request could not be assembled.
    #[error("request could not be built: {0}")]
    Build(String),

    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message reported by the backend, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The body's `error` field, which carries codes like "Already applied".
    pub fn error_field(&self) -> Option<&str> {
        match self {
            Self::Status { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Inline text for the triggering control.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Offline => OFFLINE_MESSAGE.to_owned(),
            _ => self.server_message().unwrap_or(fallback).to_owned(),
        }
    }

    /// Like `user_message`, but the `error` field wins over `message`.
    pub fn error_text(&self, fallback: &str) -> String {
        match self.error_field() {
            Some(error) => error.to_owned(),
            None => self.user_message(fallback),
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(_) => Self::Offline,
            TransportError::Build(msg) => Self::Build(msg),
            TransportError::Unavailable => Self::Unavailable,
        }
    }
}

/// Pull a human-readable message out of an error body.
pub(crate) fn body_message(body: &serde_json::Value) -> Option<String> {
    ["message", "error", "detail"].iter().find_map(|key| body_field(body, key))
}

pub(crate) fn body_field(body: &serde_json::Value, key: &str) -> Option<String> {
    body.get(key).and_then(serde_json::Value::as_str).map(str::to_owned)
}

fn jobs_endpoint(page: u32, limit: u32) -> String {
    format!("/jobs?page={page}&limit={limit}")
}

fn seeker_jobs_endpoint(page: u32, limit: u32) -> String {
    format!("/jobseekers/jobs?page={page}&limit={limit}")
}

fn job_endpoint(job_id: i64) -> String {
    format!("/jobs/{job_id}")
}

fn withdraw_endpoint(job_id: i64) -> String {
    format!("/applications/{job_id}")
}

fn application_status_endpoint(application_id: i64) -> String {
    format!("/applications/{application_id}/status")
}

fn user_endpoint(user_id: i64) -> String {
    format!("/users/{user_id}")
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Build(e.to_string()))
}

/// Backend client bound to one access token (or none).
#[derive(Clone, Debug)]
pub struct ApiClient<T = BrowserTransport> {
    transport: T,
    base_url: String,
    access: Option<String>,
}

impl ApiClient<BrowserTransport> {
    /// Browser client against the configured API base.
    pub fn browser(access: Option<String>) -> Self {
        Self::new(BrowserTransport, api_base(), access)
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>, access: Option<String>) -> Self {
        Self { transport, base_url: base_url.into(), access }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build a request for `path`, attaching the bearer token when present.
    pub fn request(&self, method: Method, path: &str) -> ApiRequest {
        ApiRequest {
            method,
            url: join_url(&self.base_url, path),
            bearer: self.access.clone().filter(|token| !token.is_empty()),
            body: None,
        }
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = request.url.clone();
        let resp = match self.transport.send(request).await {
            Ok(resp) => resp,
            Err(TransportError::Network(e)) => {
                leptos::logging::warn!("backend unreachable: {url}: {e}");
                return Err(ApiError::Offline);
            }
            Err(e) => return Err(e.into()),
        };
        if resp.is_success() {
            return Ok(resp);
        }
        match resp.status {
            401 => leptos::logging::warn!("unauthorized response from {url}; token may have expired"),
            502..=504 => {
                leptos::logging::warn!("backend offline behind proxy: {url}");
                return Err(ApiError::Offline);
            }
            _ => {}
        }
        Err(ApiError::Status {
            status: resp.status,
            message: body_message(&resp.body),
            error: body_field(&resp.body, "error"),
        })
    }

    async fn send(&self, method: Method, path: &str, body: Option<serde_json::Value>) -> Result<ApiResponse, ApiError> {
        let mut request = self.request(method, path);
        request.body = body;
        self.execute(request).await
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.send(Method::Get, path, None).await?;
        serde_json::from_value(resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Like `get_json` for list endpoints; an empty body reads as no items.
    async fn get_list<R: DeserializeOwned>(&self, path: &str) -> Result<Vec<R>, ApiError> {
        let resp = self.send(Method::Get, path, None).await?;
        if resp.body.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ---------------------------------------------------------------------
    // Auth
    // ---------------------------------------------------------------------

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns the API error on rejection, or `Decode` for a malformed body.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let resp = self.send(Method::Post, "/auth/login", Some(to_body(credentials)?)).await?;
        serde_json::from_value(resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns the API error when registration is rejected.
    pub async fn register(&self, form: &SignupForm) -> Result<RegisterResponse, ApiError> {
        let resp = self.send(Method::Post, "/auth/register", Some(to_body(form)?)).await?;
        Ok(serde_json::from_value(resp.body).unwrap_or_default())
    }

    // ---------------------------------------------------------------------
    // Jobs
    // ---------------------------------------------------------------------

    /// Public job listing.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn jobs(&self, page: u32, limit: u32) -> Result<JobsPayload, ApiError> {
        self.get_json(&jobs_endpoint(page, limit)).await
    }

    /// Listing personalised for the signed-in job seeker (carries `is_applied`).
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn seeker_jobs(&self, page: u32, limit: u32) -> Result<JobsPayload, ApiError> {
        self.get_json(&seeker_jobs_endpoint(page, limit)).await
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn job(&self, job_id: i64) -> Result<Job, ApiError> {
        self.get_json(&job_endpoint(job_id)).await
    }

    /// `POST /jobs`. Returns the response status so callers can insist on 201.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn create_job(&self, job: &NewJob) -> Result<u16, ApiError> {
        let resp = self.send(Method::Post, "/jobs", Some(to_body(job)?)).await?;
        Ok(resp.status)
    }

    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn delete_job(&self, job_id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, &job_endpoint(job_id), None).await.map(drop)
    }

    // ---------------------------------------------------------------------
    // Applications
    // ---------------------------------------------------------------------

    /// Applications of the signed-in job seeker.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn my_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.get_list("/applications/").await
    }

    /// `POST /applications`. Returns the success status (201 when created).
    ///
    /// # Errors
    ///
    /// Returns `Status { status: 400, .. }` with "Already applied" for repeats.
    pub async fn apply(&self, job_id: i64) -> Result<u16, ApiError> {
        let body = serde_json::json!({ "job_id": job_id });
        let resp = self.send(Method::Post, "/applications", Some(body)).await?;
        Ok(resp.status)
    }

    /// `DELETE /applications/{job_id}`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn withdraw(&self, job_id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, &withdraw_endpoint(job_id), None).await.map(drop)
    }

    /// `PUT /applications/{id}/status`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn update_application_status(&self, application_id: i64, status: ApplicationStatus) -> Result<(), ApiError> {
        let body = to_body(&StatusUpdate { status })?;
        self.send(Method::Put, &application_status_endpoint(application_id), Some(body))
            .await
            .map(drop)
    }

    // ---------------------------------------------------------------------
    // Job seeker
    // ---------------------------------------------------------------------

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn seeker_profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/jobseekers/me").await
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn seeker_interviews(&self) -> Result<Vec<Interview>, ApiError> {
        self.get_list("/interviews/jobseeker").await
    }

    // ---------------------------------------------------------------------
    // Employer
    // ---------------------------------------------------------------------

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn employer_profile(&self) -> Result<Profile, ApiError> {
        self.get_json("/employer/me").await
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn employer_applications(&self) -> Result<Vec<Application>, ApiError> {
        self.get_list("/employer/applications").await
    }

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn employer_jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get_list("/employer/jobs").await
    }

    /// `POST /interviews`.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn schedule_interview(&self, request: &InterviewRequest) -> Result<(), ApiError> {
        self.send(Method::Post, "/interviews", Some(to_body(request)?)).await.map(drop)
    }

    // ---------------------------------------------------------------------
    // Admin
    // ---------------------------------------------------------------------

    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.get_list("/users").await
    }

    /// Every job, unpaginated, for the admin table.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode failures.
    pub async fn all_jobs(&self) -> Result<Vec<Job>, ApiError> {
        let resp = self.send(Method::Get, "/jobs", None).await?;
        let payload: JobsPayload = serde_json::from_value(resp.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(match payload {
            JobsPayload::List(jobs) | JobsPayload::Envelope { jobs, .. } => jobs,
        })
    }

    /// # Errors
    ///
    /// Propagates transport and status failures.
    pub async fn delete_user(&self, user_id: i64) -> Result<(), ApiError> {
        self.send(Method::Delete, &user_endpoint(user_id), None).await.map(drop)
    }
}
