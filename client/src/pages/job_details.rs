//! Single job view with an apply button.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{Job, Role};
use crate::state::auth::AuthState;

use super::listing::LOGIN_REDIRECT_MESSAGE;
use super::navigation_target;

#[derive(Clone, Debug, Default, PartialEq)]
struct DetailState {
    job: Option<Job>,
    loading: bool,
    error: Option<String>,
    applied: bool,
    message: Option<String>,
}

#[component]
pub fn JobDetailsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let state = RwSignal::new(DetailState { loading: true, ..DetailState::default() });
    let target = navigation_target();
    let job_id = Memo::new(move |_| params.with(|p| p.get("id").and_then(|raw| raw.parse::<i64>().ok())));

    Effect::new(move || {
        let Some(id) = job_id.get() else {
            state.set(DetailState { error: Some("Job not found".to_owned()), ..DetailState::default() });
            return;
        };
        state.set(DetailState { loading: true, ..DetailState::default() });

        #[cfg(feature = "hydrate")]
        {
            let api = auth.with_untracked(AuthState::client);
            let seeker = auth.with_untracked(AuthState::role) == Some(Role::JobSeeker);
            leptos::task::spawn_local(async move {
                match api.job(id).await {
                    Ok(job) => state.update(|s| {
                        s.applied = s.applied || job.is_applied;
                        s.job = Some(job);
                        s.loading = false;
                    }),
                    Err(e) => {
                        leptos::logging::warn!("job {id} failed to load: {e}");
                        state.update(|s| {
                            s.loading = false;
                            s.error = Some(e.user_message("Couldn't load job"));
                        });
                        return;
                    }
                }
                if seeker {
                    match api.my_applications().await {
                        Ok(apps) if apps.iter().any(|a| a.target_job_id() == id) => state.update(|s| s.applied = true),
                        Ok(_) => {}
                        Err(e) => leptos::logging::warn!("could not load applications: {e}"),
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let on_apply = move |_| {
        let Some(id) = job_id.get_untracked() else {
            return;
        };
        if !auth.with_untracked(AuthState::is_authenticated) {
            state.update(|s| s.message = Some(LOGIN_REDIRECT_MESSAGE.to_owned()));
            target.set(Some("/login"));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            use crate::state::jobs::ApplyOutcome;
            use crate::util::timers::{MESSAGE_TTL_MS, after};

            let api = auth.with_untracked(AuthState::client);
            leptos::task::spawn_local(async move {
                let result = api.apply(id).await;
                let outcome = ApplyOutcome::from_result(&result);
                state.update(|s| {
                    s.applied = s.applied || outcome.marks_applied();
                    s.message = Some(outcome.detail_message().to_owned());
                });
                after(MESSAGE_TTL_MS, move || state.update(|s| s.message = None));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    };

    let can_apply = move || auth.with(AuthState::role) == Some(Role::JobSeeker);

    view! {
        <main class="job-details-page">
            {move || {
                let snapshot = state.get();
                if snapshot.loading {
                    return view! { <p class="page-status">"Loading job..."</p> }.into_any();
                }
                let Some(job) = snapshot.job else {
                    let error = snapshot.error.unwrap_or_else(|| "Job not found".to_owned());
                    return view! { <p class="page-status page-status--error">{error}</p> }.into_any();
                };
                let applied = snapshot.applied;
                view! {
                    <article class="job-details">
                        <h1>{job.title.clone()}</h1>
                        <p class="job-details__employer">{job.employer_name.clone()}</p>
                        <div class="job-details__meta">
                            <span>{job.location.clone()}</span>
                            <span>{job.job_type.clone()}</span>
                            {job.salary_range.clone().map(|s| view! { <span>{s}</span> })}
                            {job.posted_on().map(|d| view! { <span>{format!("Posted {d}")}</span> })}
                        </div>
                        <p class="job-details__description">{job.description.clone()}</p>
                        <Show when=can_apply>
                            <button class="btn btn--primary" disabled=applied on:click=on_apply>
                                {if applied { "Applied" } else { "Apply Now" }}
                            </button>
                        </Show>
                    </article>
                }
                    .into_any()
            }}
            <Show when=move || state.with(|s| s.message.is_some())>
                <p class="job-details__message">{move || state.with(|s| s.message.clone().unwrap_or_default())}</p>
            </Show>
        </main>
    }
}
