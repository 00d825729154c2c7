//! Page math for job listings.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use crate::net::types::{Job, JobsPayload};

/// One page of jobs plus the total page count (at least 1).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub total_pages: u32,
}

impl JobPage {
    /// Normalize either backend shape. Totals prefer `totalPages`, then
    /// `total / per_page` rounded up, then the length of what came back.
    pub fn from_payload(payload: JobsPayload, per_page: u32) -> Self {
        let per_page = u64::from(per_page.max(1));
        let (jobs, total, total_pages) = match payload {
            JobsPayload::List(jobs) => (jobs, None, None),
            JobsPayload::Envelope { jobs, total, total_pages } => (jobs, total, total_pages),
        };
        let pages = total_pages
            .filter(|p| *p > 0)
            .unwrap_or_else(|| total.filter(|t| *t > 0).unwrap_or(jobs.len() as u64).div_ceil(per_page));
        Self { jobs, total_pages: u32::try_from(pages.max(1)).unwrap_or(u32::MAX) }
    }
}

/// Previous page, never below 1.
pub fn prev_page(current: u32) -> u32 {
    current.saturating_sub(1).max(1)
}

/// Next page, never past `total`.
pub fn next_page(current: u32, total: u32) -> u32 {
    (current + 1).min(total.max(1))
}

/// Numbered buttons to render; empty when everything fits on one page.
pub fn page_numbers(total: u32) -> Vec<u32> {
    if total > 1 { (1..=total).collect() } else { Vec::new() }
}
