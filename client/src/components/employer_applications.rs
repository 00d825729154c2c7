//! Applications manager: accept or reject each application.
//!
//! Rows with an update in flight show "Updating..." and disable their
//! buttons. Accepting hands the application to the interview scheduler.

use leptos::prelude::*;

use crate::net::types::{Application, ApplicationStatus};
use crate::state::auth::AuthState;
use crate::state::employer::EmployerState;

fn set_status(auth: RwSignal<AuthState>, employer: RwSignal<EmployerState>, application_id: i64, status: ApplicationStatus) {
    if employer.with_untracked(|s| s.is_updating(application_id)) {
        return;
    }
    employer.update(|s| {
        s.error = None;
        s.begin_update(application_id);
    });

    #[cfg(feature = "hydrate")]
    {
        let api = auth.with_untracked(AuthState::client);
        leptos::task::spawn_local(async move {
            match api.update_application_status(application_id, status).await {
                Ok(()) => employer.update(|s| s.finish_update(application_id, status)),
                Err(e) => {
                    leptos::logging::warn!("status update for application {application_id} failed: {e}");
                    employer.update(|s| s.fail_update(application_id));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, status);
}

#[component]
fn ApplicationRow(application: Application, #[prop(optional)] compact: bool) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let employer = expect_context::<RwSignal<EmployerState>>();
    let id = application.id;
    let status = application.status;
    let updating = move || employer.with(|s| s.is_updating(id));
    let schedule_target = StoredValue::new(application.clone());

    view! {
        <li class=format!("application-row application-row--{}", status.as_str())>
            <div class="application-row__who">
                <span class="application-row__name">{application.applicant_name.clone()}</span>
                <span class="application-row__email">{application.applicant_email.clone()}</span>
            </div>
            <span class="application-row__job">{application.job.title.clone()}</span>
            <span class="application-row__status">{status.as_str()}</span>
            <Show when=move || !compact>
                <div class="application-row__actions">
                    <Show
                        when=updating
                        fallback=move || {
                            view! {
                                <button
                                    class="btn btn--primary"
                                    disabled={status == ApplicationStatus::Accepted}
                                    on:click=move |_| set_status(auth, employer, id, ApplicationStatus::Accepted)
                                >
                                    "Accept"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    disabled={status == ApplicationStatus::Rejected}
                                    on:click=move |_| set_status(auth, employer, id, ApplicationStatus::Rejected)
                                >
                                    "Reject"
                                </button>
                            }
                        }
                    >
                        <span class="application-row__updating">"Updating..."</span>
                    </Show>
                    <Show when=move || status == ApplicationStatus::Accepted>
                        <button
                            class="btn btn--ghost"
                            on:click=move |_| employer.update(|s| s.scheduling = Some(schedule_target.get_value()))
                        >
                            "Schedule Interview"
                        </button>
                    </Show>
                </div>
            </Show>
        </li>
    }
}

/// Every application received, newest first as the backend orders them.
#[component]
pub fn EmployerApplications() -> impl IntoView {
    let employer = expect_context::<RwSignal<EmployerState>>();

    view! {
        <section class="employer-applications">
            <h3>"Applications"</h3>
            <Show when=move || employer.with(|s| s.error.is_some())>
                <p class="form-error">{move || employer.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || employer.with(|s| !s.applications.is_empty())
                fallback=|| view! { <p class="empty-state">"No applications yet."</p> }
            >
                <ul class="application-list">
                    {move || {
                        employer
                            .get()
                            .applications
                            .into_iter()
                            .map(|application| view! { <ApplicationRow application=application/> })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}

/// The most recent few applications, read-only.
#[component]
pub fn RecentApplications() -> impl IntoView {
    let employer = expect_context::<RwSignal<EmployerState>>();

    view! {
        <section class="recent-applications">
            <h3>"Recent Applications"</h3>
            <ul class="application-list application-list--compact">
                {move || {
                    employer
                        .with(|s| s.recent_applications().to_vec())
                        .into_iter()
                        .map(|application| view! { <ApplicationRow application=application compact=true/> })
                        .collect_view()
                }}
            </ul>
        </section>
    }
}
