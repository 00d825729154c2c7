//! Jobs page: the public listing, ten per page, with applied markers.

use leptos::prelude::*;

use crate::components::job_card::JobCard;
use crate::components::pager::Pager;
use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::state::jobs::JobBoardState;

use super::{listing, navigation_target};

pub const JOBS_PAGE_SIZE: u32 = 10;

#[component]
pub fn JobsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let board = RwSignal::new(JobBoardState::default());
    let target = navigation_target();
    let is_seeker = move || auth.with(AuthState::role) == Some(Role::JobSeeker);

    // Applied markers come from the seeker's own applications.
    Effect::new(move || {
        if !is_seeker() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api = auth.with_untracked(AuthState::client);
            leptos::task::spawn_local(async move {
                match api.my_applications().await {
                    Ok(apps) => board.update(|b| b.set_applied_ids(apps.iter().map(|a| a.target_job_id()))),
                    Err(e) => leptos::logging::warn!("could not load applications: {e}"),
                }
            });
        }
    });

    let page = Memo::new(move |_| board.with(|b| b.page));
    let total = Memo::new(move |_| board.with(|b| b.total_pages));
    Effect::new(move || {
        let page = page.get();
        #[cfg(feature = "hydrate")]
        {
            use crate::util::pagination::JobPage;

            let api = auth.with_untracked(AuthState::client);
            board.update(|b| b.loading = true);
            leptos::task::spawn_local(async move {
                match api.jobs(page, JOBS_PAGE_SIZE).await {
                    Ok(payload) => board.update(|b| b.load_page(JobPage::from_payload(payload, JOBS_PAGE_SIZE))),
                    Err(e) => {
                        leptos::logging::warn!("job listing failed: {e}");
                        board.update(|b| b.fail("Couldn't load jobs"));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = page;
    });

    let on_apply = Callback::new(move |job_id: i64| listing::apply(auth, board, target, job_id));
    let on_page = Callback::new(move |n: u32| board.update(|b| b.go_to(n)));

    view! {
        <main class="jobs-page">
            <header class="page-header">
                <h1>"All Jobs"</h1>
            </header>
            {move || {
                let (loading, error) = board.with(|b| (b.loading, b.error.clone()));
                if loading {
                    return view! { <p class="page-status">"Loading jobs..."</p> }.into_any();
                }
                if let Some(error) = error {
                    return view! { <p class="page-status page-status--error">{error}</p> }.into_any();
                }
                let jobs = board.with(|b| b.jobs.clone());
                if jobs.is_empty() {
                    return view! { <p class="empty-state">"No jobs posted yet."</p> }.into_any();
                }
                let hide_actions = !is_seeker();
                view! {
                    <div class="job-grid">
                        {jobs
                            .into_iter()
                            .map(|job| {
                                let id = job.id;
                                let message = Signal::derive(move || board.with(|b| b.message(id).map(str::to_owned)));
                                view! { <JobCard job=job message=message on_apply=on_apply hide_actions=hide_actions/> }
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
