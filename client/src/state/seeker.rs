//! Job-seeker dashboard state: profile, applications and interviews.
//!
//! The dashboard re-polls on a timer without sequencing, so a slow response
//! may land after a newer one; each load simply replaces what is shown.

#[cfg(test)]
#[path = "seeker_test.rs"]
mod seeker_test;

use std::collections::{HashMap, HashSet};

use crate::net::types::{Application, Interview, Profile};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeekerDashboardState {
    pub profile: Option<Profile>,
    pub applications: Vec<Application>,
    pub interviews: Vec<Interview>,
    pub messages: HashMap<i64, String>,
    /// Job whose message was set most recently; drives the flash line.
    pub latest_message: Option<i64>,
    pub loading: bool,
}

impl SeekerDashboardState {
    /// Replace the application list, keeping one entry per job.
    pub fn set_applications(&mut self, applications: Vec<Application>) {
        let mut seen = HashSet::new();
        self.applications = applications
            .into_iter()
            .filter(|app| seen.insert(app.target_job_id()))
            .collect();
    }

    /// Drop the application for `job_id` after a successful withdraw.
    pub fn remove_application(&mut self, job_id: i64) {
        self.applications.retain(|app| app.target_job_id() != job_id);
        self.messages.insert(job_id, "Removed".to_owned());
        self.latest_message = Some(job_id);
    }

    pub fn clear_message(&mut self, job_id: i64) {
        self.messages.remove(&job_id);
        if self.latest_message == Some(job_id) {
            self.latest_message = None;
        }
    }

    /// The newest action message still showing.
    pub fn flash(&self) -> Option<&str> {
        self.latest_message
            .and_then(|job_id| self.messages.get(&job_id))
            .map(String::as_str)
    }

    pub fn greeting_name(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .filter(|n| !n.is_empty())
            .unwrap_or("there")
    }
}
