//! Home page: personalised job listing with search and apply/withdraw.
//!
//! SYSTEM CONTEXT
//! ==============
//! Employers have their own dashboard and are sent there. Everyone else gets
//! the seeker listing, or the public one when the personalised call fails.

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::components::pager::Pager;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::jobs::JobBoardState;

use super::{listing, navigation_target};

pub const HOME_PAGE_SIZE: u32 = 9;

#[cfg(feature = "hydrate")]
fn load_jobs(auth: RwSignal<AuthState>, board: RwSignal<JobBoardState>, page: u32) {
    use crate::util::pagination::JobPage;

    let api = auth.with_untracked(AuthState::client);
    board.update(|b| b.loading = true);
    leptos::task::spawn_local(async move {
        let payload = match api.seeker_jobs(page, HOME_PAGE_SIZE).await {
            Ok(payload) => Ok(payload),
            Err(e) => {
                leptos::logging::warn!("personalised listing failed, using public jobs: {e}");
                api.jobs(page, HOME_PAGE_SIZE).await
            }
        };
        match payload {
            Ok(payload) => board.update(|b| b.load_page(JobPage::from_payload(payload, HOME_PAGE_SIZE))),
            Err(e) => {
                leptos::logging::warn!("job listing failed: {e}");
                board.update(|b| b.fail("Something went wrong. Try refreshing?"));
            }
        }
    });
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let board = RwSignal::new(JobBoardState::default());
    let target = navigation_target();

    Effect::new(move || {
        if auth.with(AuthState::role) == Some(Role::Employer) {
            target.set(Some("/employer-dashboard"));
        }
    });

    let page = Memo::new(move |_| board.with(|b| b.page));
    let total = Memo::new(move |_| board.with(|b| b.total_pages));
    Effect::new(move || {
        let page = page.get();
        #[cfg(feature = "hydrate")]
        load_jobs(auth, board, page);
        #[cfg(not(feature = "hydrate"))]
        let _ = page;
    });

    let on_apply = Callback::new(move |job_id: i64| listing::apply(auth, board, target, job_id));
    let on_withdraw = Callback::new(move |job_id: i64| listing::withdraw(auth, board, job_id));
    let on_page = Callback::new(move |n: u32| board.update(|b| b.go_to(n)));

    view! {
        <main class="home-page">
            <header class="page-header">
                <h1>"Latest Jobs"</h1>
                <input
                    class="form-input search-input"
                    type="search"
                    placeholder="Search by title"
                    prop:value=move || board.with(|b| b.search.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        board.update(|b| b.search = value);
                    }
                />
            </header>
            {move || {
                let (loading, error) = board.with(|b| (b.loading, b.error.clone()));
                if loading {
                    return view! { <p class="page-status">"Loading jobs..."</p> }.into_any();
                }
                if let Some(error) = error {
                    return view! { <p class="page-status page-status--error">{error}</p> }.into_any();
                }
                let jobs = board.with(JobBoardState::visible);
                if jobs.is_empty() {
                    return view! { <p class="empty-state">"No jobs found."</p> }.into_any();
                }
                view! {
                    <div class="job-grid">
                        {jobs
                            .into_iter()
                            .map(|job| {
                                let id = job.id;
                                let message = Signal::derive(move || board.with(|b| b.message(id).map(str::to_owned)));
                                view! { <JobCard job=job message=message on_apply=on_apply on_withdraw=on_withdraw/> }
                            })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
            <Pager page=page total=total on_change=on_page/>
        </main>
    }
}
