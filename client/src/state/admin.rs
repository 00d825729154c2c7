//! Admin panel state: every user and every job, each deletable.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::{AdminUser, Job};

#[derive(Clone, Debug, PartialEq)]
pub struct AdminState {
    pub users: Vec<AdminUser>,
    pub jobs: Vec<Job>,
    pub loading_users: bool,
    pub loading_jobs: bool,
    pub error: Option<String>,
}

impl Default for AdminState {
    fn default() -> Self {
        Self { users: Vec::new(), jobs: Vec::new(), loading_users: true, loading_jobs: true, error: None }
    }
}

impl AdminState {
    pub fn remove_user(&mut self, user_id: i64) {
        self.users.retain(|u| u.id != user_id);
    }

    pub fn remove_job(&mut self, job_id: i64) {
        self.jobs.retain(|j| j.id != job_id);
    }
}
