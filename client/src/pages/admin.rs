//! Admin panel: every user and every job, each deletable after a confirm.

use leptos::prelude::*;

use crate::state::admin::AdminState;
use crate::state::auth::AuthState;

fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        false
    }
}

#[cfg(feature = "hydrate")]
fn load(auth: RwSignal<AuthState>, admin: RwSignal<AdminState>) {
    let api = auth.with_untracked(AuthState::client);
    leptos::task::spawn_local(async move {
        match api.users().await {
            Ok(users) => admin.update(|s| s.users = users),
            Err(e) => admin.update(|s| s.error = Some(e.user_message("Failed to load users"))),
        }
        admin.update(|s| s.loading_users = false);
        match api.all_jobs().await {
            Ok(jobs) => admin.update(|s| s.jobs = jobs),
            Err(e) => admin.update(|s| s.error = Some(e.user_message("Failed to load jobs"))),
        }
        admin.update(|s| s.loading_jobs = false);
    });
}

fn delete_user(auth: RwSignal<AuthState>, admin: RwSignal<AdminState>, user_id: i64) {
    if !confirm("Delete this user?") {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let api = auth.with_untracked(AuthState::client);
        leptos::task::spawn_local(async move {
            match api.delete_user(user_id).await {
                Ok(()) => admin.update(|s| s.remove_user(user_id)),
                Err(e) => {
                    leptos::logging::warn!("delete user {user_id} failed: {e}");
                    admin.update(|s| s.error = Some(e.user_message("Failed to delete user")));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, admin, user_id);
}

fn delete_job(auth: RwSignal<AuthState>, admin: RwSignal<AdminState>, job_id: i64) {
    if !confirm("Delete this job?") {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let api = auth.with_untracked(AuthState::client);
        leptos::task::spawn_local(async move {
            match api.delete_job(job_id).await {
                Ok(()) => admin.update(|s| s.remove_job(job_id)),
                Err(e) => {
                    leptos::logging::warn!("delete job {job_id} failed: {e}");
                    admin.update(|s| s.error = Some(e.user_message("Failed to delete job")));
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, admin, job_id);
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = RwSignal::new(AdminState::default());

    #[cfg(feature = "hydrate")]
    load(auth, admin);

    view! {
        <main class="admin-page">
            <h1>"Admin Panel"</h1>
            <Show when=move || admin.with(|s| s.error.is_some())>
                <p class="form-error">{move || admin.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <section class="admin-section">
                <h2>"Users"</h2>
                <Show
                    when=move || !admin.with(|s| s.loading_users)
                    fallback=|| view! { <p class="page-status">"Loading users..."</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr><th>"Name"</th><th>"Email"</th><th>"Role"</th><th></th></tr>
                        </thead>
                        <tbody>
                            {move || {
                                admin
                                    .get()
                                    .users
                                    .into_iter()
                                    .map(|user| {
                                        let id = user.id;
                                        view! {
                                            <tr>
                                                <td>{user.label().to_owned()}</td>
                                                <td>{user.email.clone().unwrap_or_default()}</td>
                                                <td>{user.role.clone()}</td>
                                                <td>
                                                    <button class="btn btn--danger" on:click=move |_| delete_user(auth, admin, id)>
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </section>
            <section class="admin-section">
                <h2>"Jobs"</h2>
                <Show
                    when=move || !admin.with(|s| s.loading_jobs)
                    fallback=|| view! { <p class="page-status">"Loading jobs..."</p> }
                >
                    <table class="admin-table">
                        <thead>
                            <tr><th>"Title"</th><th>"Employer"</th><th>"Location"</th><th></th></tr>
                        </thead>
                        <tbody>
                            {move || {
                                admin
                                    .get()
                                    .jobs
                                    .into_iter()
                                    .map(|job| {
                                        let id = job.id;
                                        view! {
                                            <tr>
                                                <td>{job.title}</td>
                                                <td>{job.employer_name}</td>
                                                <td>{job.location}</td>
                                                <td>
                                                    <button class="btn btn--danger" on:click=move |_| delete_job(auth, admin, id)>
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </Show>
            </section>
        </main>
    }
}
