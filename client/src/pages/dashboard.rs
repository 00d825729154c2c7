//! Job-seeker dashboard: profile, applications and interviews.
//!
//! SYSTEM CONTEXT
//! ==============
//! Data is fetched on mount and re-polled every few seconds while the page is
//! mounted, so status changes made by employers show up without a reload.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::{Application, Interview};
use crate::state::auth::AuthState;
use crate::state::seeker::SeekerDashboardState;

#[cfg(feature = "hydrate")]
fn refresh(auth: RwSignal<AuthState>, dashboard: RwSignal<SeekerDashboardState>) {
    let api = auth.with_untracked(AuthState::client);
    leptos::task::spawn_local(async move {
        match api.seeker_profile().await {
            Ok(profile) => dashboard.update(|d| d.profile = Some(profile)),
            Err(e) => leptos::logging::warn!("profile load failed: {e}"),
        }
        match api.my_applications().await {
            Ok(apps) => dashboard.update(|d| d.set_applications(apps)),
            Err(e) => leptos::logging::warn!("applications load failed: {e}"),
        }
        match api.seeker_interviews().await {
            Ok(interviews) => dashboard.update(|d| d.interviews = interviews),
            Err(e) => leptos::logging::warn!("interviews load failed: {e}"),
        }
        dashboard.update(|d| d.loading = false);
    });
}

/// Failures leave the entry in place; the next poll shows the truth.
fn withdraw(auth: RwSignal<AuthState>, dashboard: RwSignal<SeekerDashboardState>, job_id: i64) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::timers::{MESSAGE_TTL_MS, after};

        let api = auth.with_untracked(AuthState::client);
        leptos::task::spawn_local(async move {
            match api.withdraw(job_id).await {
                Ok(()) => {
                    dashboard.update(|d| d.remove_application(job_id));
                    after(MESSAGE_TTL_MS, move || dashboard.update(|d| d.clear_message(job_id)));
                }
                Err(e) => leptos::logging::warn!("withdraw from job {job_id} failed: {e}"),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, dashboard, job_id);
}

#[component]
fn ApplicationItem(application: Application, on_withdraw: Callback<i64>) -> impl IntoView {
    let job_id = application.target_job_id();
    let title = if application.job.title.is_empty() { format!("Job #{job_id}") } else { application.job.title.clone() };
    let status = application.status.as_str();

    view! {
        <li class="dashboard-item">
            <A href=format!("/jobs/{job_id}") attr:class="dashboard-item__title">{title}</A>
            <span class=format!("status-pill status-pill--{status}")>{status}</span>
            <button class="btn btn--ghost" on:click=move |_| on_withdraw.run(job_id)>"Withdraw"</button>
        </li>
    }
}

#[component]
fn InterviewItem(interview: Interview) -> impl IntoView {
    view! {
        <li class="dashboard-item dashboard-item--interview">
            <span class="dashboard-item__title">{interview.job.title.clone()}</span>
            <span>{format!("{} {}", interview.date, interview.time)}</span>
            <span>{interview.location.clone()}</span>
            {interview.notes.clone().map(|n| view! { <p class="dashboard-item__notes">{n}</p> })}
        </li>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = RwSignal::new(SeekerDashboardState { loading: true, ..SeekerDashboardState::default() });

    #[cfg(feature = "hydrate")]
    {
        use crate::util::timers::POLL_INTERVAL_SECS;

        refresh(auth, dashboard);
        let poll_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let poll_alive_task = poll_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(POLL_INTERVAL_SECS)).await;
                if !poll_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                refresh(auth, dashboard);
            }
        });
        on_cleanup(move || poll_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let on_withdraw = Callback::new(move |job_id: i64| withdraw(auth, dashboard, job_id));
    let flash = move || dashboard.with(|d| d.flash().map(str::to_owned));

    view! {
        <main class="dashboard-page">
            <header class="page-header">
                <h1>{move || format!("Welcome back, {}", dashboard.with(|d| d.greeting_name().to_owned()))}</h1>
                <p class="page-header__sub">
                    {move || dashboard.with(|d| d.profile.as_ref().and_then(|p| p.contact().map(str::to_owned)))}
                </p>
            </header>
            <Show when=move || dashboard.with(|d| d.loading)>
                <p class="page-status">"Loading dashboard..."</p>
            </Show>
            <Show when=move || flash().is_some()>
                <p class="dashboard-flash">{move || flash().unwrap_or_default()}</p>
            </Show>
            <section class="dashboard-section">
                <h2>"My Applications"</h2>
                <Show
                    when=move || dashboard.with(|d| !d.applications.is_empty())
                    fallback=|| view! { <p class="empty-state">"You haven't applied to any jobs yet."</p> }
                >
                    <ul class="dashboard-list">
                        {move || {
                            dashboard
                                .get()
                                .applications
                                .into_iter()
                                .map(|application| view! { <ApplicationItem application=application on_withdraw=on_withdraw/> })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </section>
            <section class="dashboard-section">
                <h2>"Upcoming Interviews"</h2>
                <Show
                    when=move || dashboard.with(|d| !d.interviews.is_empty())
                    fallback=|| view! { <p class="empty-state">"No interviews scheduled."</p> }
                >
                    <ul class="dashboard-list">
                        {move || {
                            dashboard
                                .get()
                                .interviews
                                .into_iter()
                                .map(|interview| view! { <InterviewItem interview=interview/> })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </section>
        </main>
    }
}
