//! Job-listing state shared by the home and jobs pages.
//!
//! DESIGN
//! ======
//! Apply/withdraw results are folded in through `ApplyOutcome` and
//! `WithdrawOutcome` so the listing, the applied-id set and the per-job
//! action messages stay consistent after each round-trip.

#[cfg(test)]
#[path = "jobs_test.rs"]
mod jobs_test;

use std::collections::{BTreeSet, HashMap};

use crate::net::api::ApiError;
use crate::net::types::Job;
use crate::util::pagination::JobPage;

/// Result of `POST /applications` as the UI sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    AlreadyApplied,
    LoginRequired,
    Failed(String),
}

impl ApplyOutcome {
    pub fn from_result(result: &Result<u16, ApiError>) -> Self {
        match result {
            Ok(_) => Self::Applied,
            Err(err) if is_already_applied(err) => Self::AlreadyApplied,
            Err(err) if err.status() == Some(401) => Self::LoginRequired,
            Err(err) => Self::Failed(err.error_text("Failed to apply")),
        }
    }

    /// Card-level message.
    pub fn message(&self) -> &str {
        match self {
            Self::Applied => "Applied!",
            Self::AlreadyApplied => "Already applied",
            Self::LoginRequired => "Please login to apply",
            Self::Failed(msg) => msg.as_str(),
        }
    }

    /// Message on the job details page.
    pub fn detail_message(&self) -> &str {
        match self {
            Self::Applied => "Application submitted!",
            Self::AlreadyApplied => "You have already applied for this job",
            other => other.message(),
        }
    }

    pub fn marks_applied(&self) -> bool {
        matches!(self, Self::Applied | Self::AlreadyApplied)
    }
}

fn is_already_applied(err: &ApiError) -> bool {
    match err.status() {
        Some(409) => true,
        Some(400) => err
            .error_field()
            .or_else(|| err.server_message())
            .is_some_and(|m| m.trim().eq_ignore_ascii_case("already applied")),
        _ => false,
    }
}

/// Result of `DELETE /applications/{job_id}`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WithdrawOutcome {
    Removed,
    Failed(String),
}

impl WithdrawOutcome {
    pub fn from_result(result: &Result<(), ApiError>) -> Self {
        match result {
            Ok(()) => Self::Removed,
            Err(err) => Self::Failed(err.error_text("Failed to remove application")),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Removed => "Removed",
            Self::Failed(msg) => msg.as_str(),
        }
    }
}

/// One paginated listing with search and per-job action messages.
#[derive(Clone, Debug, PartialEq)]
pub struct JobBoardState {
    pub jobs: Vec<Job>,
    pub page: u32,
    pub total_pages: u32,
    pub loading: bool,
    pub error: Option<String>,
    pub search: String,
    pub messages: HashMap<i64, String>,
    pub applied: BTreeSet<i64>,
}

impl Default for JobBoardState {
    fn default() -> Self {
        Self {
            jobs: Vec::new(),
            page: 1,
            total_pages: 1,
            loading: true,
            error: None,
            search: String::new(),
            messages: HashMap::new(),
            applied: BTreeSet::new(),
        }
    }
}

impl JobBoardState {
    /// Install a fetched page. Jobs already known as applied keep that mark.
    pub fn load_page(&mut self, page: JobPage) {
        self.applied.extend(page.jobs.iter().filter(|j| j.is_applied).map(|j| j.id));
        self.jobs = page.jobs;
        self.total_pages = page.total_pages;
        self.sync_applied_flags();
        self.loading = false;
        self.error = None;
    }

    /// Seed applied ids from the seeker's application list.
    pub fn set_applied_ids(&mut self, ids: impl IntoIterator<Item = i64>) {
        self.applied = ids.into_iter().collect();
        self.sync_applied_flags();
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    pub fn go_to(&mut self, page: u32) {
        self.page = page.clamp(1, self.total_pages.max(1));
    }

    pub fn record_apply(&mut self, job_id: i64, outcome: &ApplyOutcome) {
        if outcome.marks_applied() {
            self.applied.insert(job_id);
            self.sync_applied_flags();
        }
        self.messages.insert(job_id, outcome.message().to_owned());
    }

    pub fn record_withdraw(&mut self, job_id: i64, outcome: &WithdrawOutcome) {
        if *outcome == WithdrawOutcome::Removed {
            self.applied.remove(&job_id);
            self.sync_applied_flags();
        }
        self.messages.insert(job_id, outcome.message().to_owned());
    }

    pub fn set_message(&mut self, job_id: i64, message: impl Into<String>) {
        self.messages.insert(job_id, message.into());
    }

    pub fn message(&self, job_id: i64) -> Option<&str> {
        self.messages.get(&job_id).map(String::as_str).filter(|m| !m.is_empty())
    }

    /// Jobs whose title contains the search text, case-insensitively.
    pub fn visible(&self) -> Vec<Job> {
        let needle = self.search.trim().to_lowercase();
        self.jobs
            .iter()
            .filter(|job| needle.is_empty() || job.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    fn sync_applied_flags(&mut self) {
        for job in &mut self.jobs {
            job.is_applied = self.applied.contains(&job.id);
        }
    }
}
