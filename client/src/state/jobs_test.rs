use super::*;
use crate::net::types::JobsPayload;

fn job(id: i64, title: &str) -> Job {
    Job { id, title: title.to_owned(), ..Job::default() }
}

fn board_with(jobs: Vec<Job>) -> JobBoardState {
    let mut state = JobBoardState::default();
    state.load_page(JobPage::from_payload(JobsPayload::List(jobs), 9));
    state
}

// =============================================================
// ApplyOutcome
// =============================================================

#[test]
fn apply_outcome_success() {
    assert_eq!(ApplyOutcome::from_result(&Ok(201)), ApplyOutcome::Applied);
}

#[test]
fn apply_outcome_already_applied() {
    let err = ApiError::Status { status: 400, message: Some("Already applied".to_owned()), error: None };
    let outcome = ApplyOutcome::from_result(&Err(err));
    assert_eq!(outcome, ApplyOutcome::AlreadyApplied);
    assert_eq!(outcome.message(), "Already applied");
    assert_eq!(outcome.detail_message(), "You have already applied for this job");
}

#[test]
fn apply_outcome_reads_error_field_over_message() {
    let err = ApiError::Status {
        status: 400,
        message: Some("Bad Request".to_owned()),
        error: Some("Already applied".to_owned()),
    };
    assert_eq!(ApplyOutcome::from_result(&Err(err)), ApplyOutcome::AlreadyApplied);
}

#[test]
fn apply_failure_text_prefers_error_field() {
    let err = ApiError::Status {
        status: 400,
        message: Some("Bad Request".to_owned()),
        error: Some("Job closed".to_owned()),
    };
    assert_eq!(ApplyOutcome::from_result(&Err(err)), ApplyOutcome::Failed("Job closed".to_owned()));
}

#[test]
fn apply_outcome_conflict_counts_as_already_applied() {
    let err = ApiError::Status { status: 409, message: None, error: None };
    assert_eq!(ApplyOutcome::from_result(&Err(err)), ApplyOutcome::AlreadyApplied);
}

#[test]
fn apply_outcome_other_400_is_failure_with_server_text() {
    let err = ApiError::Status { status: 400, message: Some("Job closed".to_owned()), error: None };
    assert_eq!(ApplyOutcome::from_result(&Err(err)), ApplyOutcome::Failed("Job closed".to_owned()));
}

#[test]
fn apply_outcome_unauthorized_asks_for_login() {
    let err = ApiError::Status { status: 401, message: None, error: None };
    assert_eq!(ApplyOutcome::from_result(&Err(err)).message(), "Please login to apply");
}

#[test]
fn apply_outcome_offline() {
    assert_eq!(ApplyOutcome::from_result(&Err(ApiError::Offline)).message(), "Backend offline");
}

// =============================================================
// JobBoardState
// =============================================================

#[test]
fn default_board_starts_loading_on_page_one() {
    let state = JobBoardState::default();
    assert!(state.loading);
    assert_eq!(state.page, 1);
}

#[test]
fn applying_twice_does_not_duplicate_entries() {
    let mut state = board_with(vec![job(1, "Dev"), job(2, "Ops")]);
    state.record_apply(1, &ApplyOutcome::Applied);
    state.record_apply(1, &ApplyOutcome::AlreadyApplied);

    assert_eq!(state.applied.iter().copied().collect::<Vec<_>>(), vec![1]);
    assert_eq!(state.jobs.iter().filter(|j| j.is_applied).count(), 1);
    assert_eq!(state.jobs.len(), 2);
    assert_eq!(state.message(1), Some("Already applied"));
}

#[test]
fn failed_apply_leaves_job_unapplied() {
    let mut state = board_with(vec![job(1, "Dev")]);
    state.record_apply(1, &ApplyOutcome::Failed("Failed to apply".to_owned()));
    assert!(!state.jobs[0].is_applied);
    assert_eq!(state.message(1), Some("Failed to apply"));
}

#[test]
fn withdraw_unmarks_job() {
    let mut state = board_with(vec![job(1, "Dev")]);
    state.record_apply(1, &ApplyOutcome::Applied);
    state.record_withdraw(1, &WithdrawOutcome::Removed);
    assert!(!state.jobs[0].is_applied);
    assert!(state.applied.is_empty());
    assert_eq!(state.message(1), Some("Removed"));
}

#[test]
fn failed_withdraw_keeps_application() {
    let mut state = board_with(vec![job(1, "Dev")]);
    state.record_apply(1, &ApplyOutcome::Applied);
    let outcome = WithdrawOutcome::from_result(&Err(ApiError::Status { status: 500, message: None, error: None }));
    state.record_withdraw(1, &outcome);
    assert!(state.jobs[0].is_applied);
    assert_eq!(state.message(1), Some("Failed to remove application"));
}

#[test]
fn withdraw_failure_text_prefers_error_field() {
    let err = ApiError::Status {
        status: 404,
        message: Some("Not Found".to_owned()),
        error: Some("Application not found".to_owned()),
    };
    assert_eq!(WithdrawOutcome::from_result(&Err(err)).message(), "Application not found");
}

#[test]
fn applied_ids_survive_page_reload() {
    let mut state = JobBoardState::default();
    state.set_applied_ids([2]);
    state.load_page(JobPage::from_payload(JobsPayload::List(vec![job(1, "A"), job(2, "B")]), 10));
    assert!(!state.jobs[0].is_applied);
    assert!(state.jobs[1].is_applied);
}

#[test]
fn server_applied_flag_is_kept() {
    let mut applied = job(3, "C");
    applied.is_applied = true;
    let state = board_with(vec![applied]);
    assert!(state.applied.contains(&3));
}

#[test]
fn search_filters_by_title_case_insensitively() {
    let mut state = board_with(vec![job(1, "Rust Engineer"), job(2, "Designer")]);
    state.search = "  rust ".to_owned();
    let visible = state.visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, 1);
    state.search.clear();
    assert_eq!(state.visible().len(), 2);
}

#[test]
fn go_to_clamps_to_known_pages() {
    let mut state = JobBoardState::default();
    state.load_page(JobPage { jobs: Vec::new(), total_pages: 3 });
    state.go_to(7);
    assert_eq!(state.page, 3);
    state.go_to(0);
    assert_eq!(state.page, 1);
}

#[test]
fn fail_stops_loading() {
    let mut state = JobBoardState::default();
    state.fail("Couldn't load jobs");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("Couldn't load jobs"));
}
