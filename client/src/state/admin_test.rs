use super::*;

#[test]
fn starts_loading_both_tables() {
    let state = AdminState::default();
    assert!(state.loading_users && state.loading_jobs);
}

#[test]
fn removals_filter_by_id() {
    let mut state = AdminState {
        users: vec![AdminUser { id: 1, ..AdminUser::default() }, AdminUser { id: 2, ..AdminUser::default() }],
        jobs: vec![Job { id: 5, ..Job::default() }],
        ..AdminState::default()
    };
    state.remove_user(1);
    state.remove_job(5);
    state.remove_job(99);
    assert_eq!(state.users.len(), 1);
    assert_eq!(state.users[0].id, 2);
    assert!(state.jobs.is_empty());
}
