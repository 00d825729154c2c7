//! Employer dashboard state: posted jobs, received applications and the
//! in-flight status updates.

#[cfg(test)]
#[path = "employer_test.rs"]
mod employer_test;

use std::collections::BTreeSet;

use crate::net::types::{Application, ApplicationStatus, Job, Profile};

/// How many applications the dashboard summary shows.
pub const RECENT_APPLICATIONS: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EmployerState {
    pub profile: Option<Profile>,
    pub jobs: Vec<Job>,
    pub applications: Vec<Application>,
    pub loading: bool,
    pub error: Option<String>,
    /// Application ids with a status update in flight.
    pub updating: BTreeSet<i64>,
    /// Application whose interview is being scheduled.
    pub scheduling: Option<Application>,
}

impl EmployerState {
    pub fn recent_applications(&self) -> &[Application] {
        &self.applications[..self.applications.len().min(RECENT_APPLICATIONS)]
    }

    pub fn accepted_count(&self) -> usize {
        self.applications
            .iter()
            .filter(|a| a.status == ApplicationStatus::Accepted)
            .count()
    }

    pub fn begin_update(&mut self, application_id: i64) {
        self.updating.insert(application_id);
    }

    pub fn is_updating(&self, application_id: i64) -> bool {
        self.updating.contains(&application_id)
    }

    /// Apply a confirmed status change. Accepting opens the interview
    /// scheduler for that application.
    pub fn finish_update(&mut self, application_id: i64, status: ApplicationStatus) {
        self.updating.remove(&application_id);
        let Some(app) = self.applications.iter_mut().find(|a| a.id == application_id) else {
            return;
        };
        app.status = status;
        if status == ApplicationStatus::Accepted {
            self.scheduling = Some(app.clone());
        }
    }

    pub fn fail_update(&mut self, application_id: i64) {
        self.updating.remove(&application_id);
        self.error = Some("Failed to update application status".to_owned());
    }

    pub fn greeting_name(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or("Employer")
    }
}
