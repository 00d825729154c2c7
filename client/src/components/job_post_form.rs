//! Employer form for posting a new job.

use leptos::prelude::*;

use crate::net::types::NewJob;
use crate::state::auth::AuthState;
use crate::util::validation::{JOB_TYPES, blank_job, validate_new_job};

/// Post-job form. `on_posted` fires after the backend accepts the job.
#[component]
pub fn JobPostForm(on_posted: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let draft = RwSignal::new(blank_job());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let field = move |apply: fn(&mut NewJob, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            draft.update(|d| apply(d, value));
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let job = draft.get();
        notice.set(None);
        if let Err(msg) = validate_new_job(&job) {
            error.set(Some(msg.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = auth.with_untracked(AuthState::client);
            leptos::task::spawn_local(async move {
                match api.create_job(&job).await {
                    Ok(201) => {
                        draft.set(blank_job());
                        notice.set(Some("Job posted successfully!"));
                        on_posted.run(());
                    }
                    Ok(status) => {
                        leptos::logging::warn!("job post returned status {status}");
                        error.set(Some("Failed to post job".to_owned()));
                    }
                    Err(e) => error.set(Some(e.user_message("Failed to post job"))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, job, on_posted);
    };

    view! {
        <form class="job-post-form" on:submit=on_submit>
            <h3>"Post a Job"</h3>
            <input
                class="form-input"
                placeholder="Job title"
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=field(|d, v| d.title = v)
            />
            <textarea
                class="form-input form-input--area"
                placeholder="Description"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=field(|d, v| d.description = v)
            ></textarea>
            <input
                class="form-input"
                placeholder="Location"
                prop:value=move || draft.with(|d| d.location.clone())
                on:input=field(|d, v| d.location = v)
            />
            <input
                class="form-input"
                type="number"
                min="0"
                placeholder="Salary"
                prop:value=move || draft.with(|d| d.salary.clone())
                on:input=field(|d, v| d.salary = v)
            />
            <select
                class="form-input"
                prop:value=move || draft.with(|d| d.job_type.clone())
                on:change=field(|d, v| d.job_type = v)
            >
                {JOB_TYPES
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Posting..." } else { "Post Job" }}
            </button>
            <Show when=move || error.with(Option::is_some)>
                <p class="form-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || notice.with(Option::is_some)>
                <p class="form-notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
