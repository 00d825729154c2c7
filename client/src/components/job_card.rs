//! Card for one job in a listing, with apply/withdraw actions.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Job;

/// A job summary card. `message` is the per-job action feedback line.
#[component]
pub fn JobCard(
    job: Job,
    #[prop(into)] message: Signal<Option<String>>,
    on_apply: Callback<i64>,
    #[prop(optional)] on_withdraw: Option<Callback<i64>>,
    #[prop(optional)] hide_actions: bool,
) -> impl IntoView {
    let job_id = job.id;
    let applied = job.is_applied;
    let href = format!("/jobs/{job_id}");
    let posted = job.posted_on().map(|d| format!("Posted {d}"));
    let salary = job.salary_range.clone();
    let employer = (!job.employer_name.is_empty()).then(|| job.employer_name.clone());
    let summary = job.summary();
    let Job { title, location, job_type, .. } = job;

    view! {
        <article class="job-card" class:job-card--applied=applied>
            <header class="job-card__header">
                <A href=href attr:class="job-card__title">{title}</A>
                {employer.map(|name| view! { <span class="job-card__employer">{name}</span> })}
            </header>
            <div class="job-card__meta">
                <span class="job-card__location">{location}</span>
                <span class="job-card__type">{job_type}</span>
                {salary.map(|s| view! { <span class="job-card__salary">{s}</span> })}
            </div>
            <p class="job-card__summary">{summary}</p>
            {posted.map(|p| view! { <span class="job-card__posted">{p}</span> })}
            <Show when=move || !hide_actions>
                <div class="job-card__actions">
                    {move || if applied {
                        view! {
                            <span class="job-card__badge">"Applied"</span>
                            {on_withdraw.map(|cb| view! {
                                <button class="btn btn--ghost" on:click=move |_| cb.run(job_id)>"Withdraw"</button>
                            })}
                        }
                            .into_any()
                    } else {
                        view! {
                            <button class="btn btn--primary" on:click=move |_| on_apply.run(job_id)>"Apply"</button>
                        }
                            .into_any()
                    }}
                </div>
            </Show>
            <Show when=move || message.with(Option::is_some)>
                <p class="job-card__message">{move || message.get().unwrap_or_default()}</p>
            </Show>
        </article>
    }
}
