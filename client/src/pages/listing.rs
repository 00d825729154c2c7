//! Apply/withdraw round-trips shared by the job listing pages.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::jobs::JobBoardState;

pub(crate) const LOGIN_REDIRECT_MESSAGE: &str = "Redirecting to login...";

/// Apply to `job_id` and fold the outcome into `board`. Without a session
/// the visitor is sent to `/login` instead.
pub(crate) fn apply(
    auth: RwSignal<AuthState>,
    board: RwSignal<JobBoardState>,
    target: RwSignal<Option<&'static str>>,
    job_id: i64,
) {
    if !auth.with_untracked(AuthState::is_authenticated) {
        board.update(|b| b.set_message(job_id, LOGIN_REDIRECT_MESSAGE));
        target.set(Some("/login"));
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        let api = auth.with_untracked(AuthState::client);
        leptos::task::spawn_local(async move {
            let result = api.apply(job_id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("apply to job {job_id} failed: {e}");
            }
            let outcome = crate::state::jobs::ApplyOutcome::from_result(&result);
            board.update(|b| b.record_apply(job_id, &outcome));
        });
    }
}

/// Withdraw the application for `job_id`; failures are shown on the card.
pub(crate) fn withdraw(auth: RwSignal<AuthState>, board: RwSignal<JobBoardState>, job_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        let api = auth.with_untracked(AuthState::client);
        leptos::task::spawn_local(async move {
            let result = api.withdraw(job_id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("withdraw from job {job_id} failed: {e}");
            }
            let outcome = crate::state::jobs::WithdrawOutcome::from_result(&result);
            board.update(|b| b.record_withdraw(job_id, &outcome));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, board, job_id);
}
