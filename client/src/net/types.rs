//! Wire DTOs for the job-board REST backend.
//!
//! DESIGN
//! ======
//! These types mirror backend JSON shapes loosely: missing fields default and
//! numeric ids/amounts are accepted as either numbers or numeric strings, so a
//! slightly different backend payload degrades to blanks instead of failing
//! the whole page load.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Account role. Drives route gating and the post-login landing page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    JobSeeker,
    Employer,
    Admin,
}

impl Role {
    /// Wire/storage spelling of the role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JobSeeker => "job_seeker",
            Self::Employer => "employer",
            Self::Admin => "admin",
        }
    }

    /// Parse the wire spelling; unknown values yield `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "job_seeker" => Some(Self::JobSeeker),
            "employer" => Some(Self::Employer),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Human label used on role tabs.
    pub fn label(self) -> &'static str {
        match self {
            Self::JobSeeker => "Job Seeker",
            Self::Employer => "Employer",
            Self::Admin => "Admin",
        }
    }

    /// Route a freshly signed-in user lands on.
    pub fn home_path(self) -> &'static str {
        match self {
            Self::JobSeeker => "/dashboard",
            Self::Employer => "/employer-dashboard",
            Self::Admin => "/admin",
        }
    }
}

/// Authenticated identity as returned by `POST /auth/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub role: Role,
}

impl User {
    /// Name to greet the user with, falling back to email.
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() { &self.email } else { &self.name }
    }
}

/// `POST /auth/login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
}

/// `POST /auth/login` response body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
}

/// `POST /auth/register` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SignupForm {
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// `POST /auth/register` response body. Only the email is used, for auto-login.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub email: Option<String>,
}

/// A job posting.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: String,
    #[serde(deserialize_with = "deserialize_opt_text")]
    pub salary_range: Option<String>,
    pub employer_name: String,
    pub created_at: Option<String>,
    pub is_applied: bool,
}

impl Job {
    /// First 100 characters of the description, for cards.
    pub fn summary(&self) -> String {
        let mut out: String = self.description.chars().take(100).collect();
        out.push_str("...");
        out
    }

    /// Date portion of `created_at` (`YYYY-MM-DD`), if present.
    pub fn posted_on(&self) -> Option<&str> {
        self.created_at
            .as_deref()
            .and_then(|ts| ts.split(['T', ' ']).next())
            .filter(|d| !d.is_empty())
    }
}

/// Paginated job listing. The backend answers either with a bare array or an
/// envelope carrying totals.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum JobsPayload {
    List(Vec<Job>),
    Envelope {
        #[serde(default)]
        jobs: Vec<Job>,
        #[serde(default)]
        total: Option<u64>,
        #[serde(default, rename = "totalPages")]
        total_pages: Option<u64>,
    },
}

/// Application lifecycle status as shown to employers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

/// A job application, seen from either side.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    #[serde(deserialize_with = "deserialize_opt_id")]
    pub job_id: Option<i64>,
    pub job: Job,
    pub status: ApplicationStatus,
    pub applicant_name: String,
    pub applicant_email: String,
}

impl Application {
    /// Job this application targets; older payloads only carry the nested job.
    pub fn target_job_id(&self) -> i64 {
        self.job_id.unwrap_or(self.job.id)
    }
}

/// `PUT /applications/{id}/status` request body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

/// A scheduled interview for the signed-in job seeker.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interview {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub job: Job,
    pub date: String,
    pub time: String,
    pub location: String,
    pub notes: Option<String>,
}

/// `POST /interviews` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InterviewRequest {
    pub application_id: i64,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Profile returned by `/jobseekers/me` and `/employer/me`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub username: Option<String>,
}

impl Profile {
    pub fn contact(&self) -> Option<&str> {
        self.email.as_deref().or(self.username.as_deref())
    }

    /// Single uppercase initial for avatar bubbles.
    pub fn initial(&self, fallback: char) -> char {
        self.name
            .as_deref()
            .and_then(|n| n.chars().next())
            .map_or(fallback, |c| c.to_ascii_uppercase())
    }
}

/// `POST /jobs` request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub location: String,
    pub salary: String,
    pub job_type: String,
}

/// A user row in the admin panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: String,
}

impl AdminUser {
    pub fn label(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .or(self.email.as_deref())
            .unwrap_or("")
    }
}

fn id_from_value<E: serde::de::Error>(value: &serde_json::Value) -> Result<i64, E> {
    match value {
        serde_json::Value::Number(number) => number
            .as_i64()
            .ok_or_else(|| E::custom("expected integer id")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| E::custom("expected numeric id string")),
        _ => Err(E::custom("expected number or numeric string")),
    }
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    id_from_value(&value)
}

fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    id_from_value(&value).map(Some)
}

fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        _ => Err(D::Error::custom("expected string or number")),
    }
}
