use super::*;
use crate::net::types::Job;

fn app(id: i64, job_id: i64) -> Application {
    Application { id, job_id: Some(job_id), job: Job { id: job_id, ..Job::default() }, ..Application::default() }
}

#[test]
fn duplicate_applications_for_one_job_collapse() {
    let mut state = SeekerDashboardState::default();
    state.set_applications(vec![app(1, 10), app(2, 10), app(3, 11)]);
    let ids: Vec<i64> = state.applications.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn remove_application_filters_by_job_and_sets_message() {
    let mut state = SeekerDashboardState::default();
    state.set_applications(vec![app(1, 10), app(3, 11)]);
    state.remove_application(10);
    assert_eq!(state.applications.len(), 1);
    assert_eq!(state.applications[0].target_job_id(), 11);
    assert_eq!(state.messages.get(&10).map(String::as_str), Some("Removed"));
    state.clear_message(10);
    assert!(state.messages.is_empty());
}

#[test]
fn flash_follows_latest_withdraw() {
    let mut state = SeekerDashboardState::default();
    state.set_applications(vec![app(1, 10), app(3, 11)]);
    assert_eq!(state.flash(), None);
    state.remove_application(10);
    state.remove_application(11);
    assert_eq!(state.latest_message, Some(11));
    assert_eq!(state.flash(), Some("Removed"));

    state.clear_message(10);
    assert_eq!(state.latest_message, Some(11));
    state.clear_message(11);
    assert_eq!(state.flash(), None);
}

#[test]
fn later_poll_replaces_earlier_result() {
    let mut state = SeekerDashboardState::default();
    state.set_applications(vec![app(1, 10), app(3, 11)]);
    state.set_applications(vec![app(3, 11)]);
    assert_eq!(state.applications.len(), 1);
}

#[test]
fn greeting_falls_back() {
    let mut state = SeekerDashboardState::default();
    assert_eq!(state.greeting_name(), "there");
    state.profile = Some(Profile { name: Some("Ada".to_owned()), ..Profile::default() });
    assert_eq!(state.greeting_name(), "Ada");
}
