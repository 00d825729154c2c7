//! Modal for scheduling an interview with an accepted applicant.

use leptos::prelude::*;

use crate::net::types::InterviewRequest;
use crate::state::auth::AuthState;
use crate::state::employer::EmployerState;
use crate::util::validation::validate_interview;

/// Shown while `EmployerState::scheduling` holds an application.
#[component]
pub fn InterviewScheduler() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let employer = expect_context::<RwSignal<EmployerState>>();
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let close = move || {
        employer.update(|s| s.scheduling = None);
        for field in [date, time, location, notes] {
            field.set(String::new());
        }
        error.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(application_id) = employer.with_untracked(|s| s.scheduling.as_ref().map(|a| a.id)) else {
            return;
        };
        let note = notes.get().trim().to_owned();
        let request = InterviewRequest {
            application_id,
            date: date.get(),
            time: time.get(),
            location: location.get().trim().to_owned(),
            notes: (!note.is_empty()).then_some(note),
        };
        if let Err(msg) = validate_interview(&request) {
            error.set(Some(msg.to_owned()));
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let api = auth.with_untracked(AuthState::client);
            leptos::task::spawn_local(async move {
                match api.schedule_interview(&request).await {
                    Ok(()) => close(),
                    Err(e) => error.set(Some(e.user_message("Failed to schedule interview"))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, request);
    };

    let applicant = move || {
        employer.with(|s| {
            s.scheduling
                .as_ref()
                .map(|a| format!("{} for {}", a.applicant_name, a.job.title))
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || employer.with(|s| s.scheduling.is_some())>
            <div class="dialog-backdrop">
                <form class="dialog interview-scheduler" on:submit=on_submit>
                    <h3>"Schedule Interview"</h3>
                    <p class="dialog__subtitle">{applicant}</p>
                    <input
                        class="form-input"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="time"
                        prop:value=move || time.get()
                        on:input=move |ev| time.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        placeholder="Location or meeting link"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                    <textarea
                        class="form-input form-input--area"
                        placeholder="Notes (optional)"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                    <Show when=move || error.with(Option::is_some)>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn btn--ghost" type="button" on:click=move |_| close()>"Cancel"</button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Scheduling..." } else { "Schedule" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
