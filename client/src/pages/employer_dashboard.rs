//! Employer dashboard: stats, recent applications, job posting and the
//! full applications manager.

use leptos::prelude::*;

use crate::components::employer_applications::{EmployerApplications, RecentApplications};
use crate::components::interview_scheduler::InterviewScheduler;
use crate::components::job_post_form::JobPostForm;
use crate::state::auth::AuthState;
use crate::state::employer::EmployerState;

#[cfg(feature = "hydrate")]
fn load(auth: RwSignal<AuthState>, employer: RwSignal<EmployerState>) {
    let api = auth.with_untracked(AuthState::client);
    employer.update(|s| s.loading = true);
    leptos::task::spawn_local(async move {
        let (profile, applications, jobs) = (
            api.employer_profile().await,
            api.employer_applications().await,
            api.employer_jobs().await,
        );
        employer.update(|s| {
            s.loading = false;
            match profile {
                Ok(profile) => s.profile = Some(profile),
                Err(e) => leptos::logging::warn!("employer profile load failed: {e}"),
            }
            match (applications, jobs) {
                (Ok(applications), Ok(jobs)) => {
                    s.applications = applications;
                    s.jobs = jobs;
                }
                (Err(e), _) | (_, Err(e)) => {
                    leptos::logging::warn!("employer dashboard load failed: {e}");
                    s.error = Some(e.user_message("Failed to load dashboard"));
                }
            }
        });
    });
}

#[component]
fn Stat(label: &'static str, #[prop(into)] value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="stat">
            <span class="stat__value">{move || value.get()}</span>
            <span class="stat__label">{label}</span>
        </div>
    }
}

#[component]
pub fn EmployerDashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let employer = RwSignal::new(EmployerState { loading: true, ..EmployerState::default() });
    provide_context(employer);

    #[cfg(feature = "hydrate")]
    load(auth, employer);

    let on_posted = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        load(auth, employer);
        #[cfg(not(feature = "hydrate"))]
        let _ = auth;
    });

    let initial = move || employer.with(|s| s.profile.as_ref().map_or('E', |p| p.initial('E')));

    view! {
        <main class="employer-dashboard">
            <header class="page-header">
                <span class="avatar">{initial}</span>
                <h1>{move || format!("Welcome, {}", employer.with(|s| s.greeting_name().to_owned()))}</h1>
            </header>
            <Show when=move || employer.with(|s| s.loading)>
                <p class="page-status">"Loading dashboard..."</p>
            </Show>
            <div class="stats">
                <Stat label="Jobs Posted" value=Signal::derive(move || employer.with(|s| s.jobs.len()))/>
                <Stat label="Applications" value=Signal::derive(move || employer.with(|s| s.applications.len()))/>
                <Stat label="Accepted" value=Signal::derive(move || employer.with(EmployerState::accepted_count))/>
            </div>
            <RecentApplications/>
            <JobPostForm on_posted=on_posted/>
            <EmployerApplications/>
            <InterviewScheduler/>
        </main>
    }
}
