//! Top navigation with role-aware links and logout.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::storage::LocalStorage;

fn links_for(role: Role) -> &'static [(&'static str, &'static str)] {
    match role {
        Role::JobSeeker => &[("/", "Home"), ("/jobs", "Jobs"), ("/dashboard", "Dashboard")],
        Role::Employer => &[("/jobs", "Jobs"), ("/employer-dashboard", "Dashboard")],
        Role::Admin => &[("/", "Home"), ("/admin", "Admin")],
    }
}

/// Clear the session everywhere and reload on the login page.
pub fn logout(auth: RwSignal<AuthState>) {
    auth.update(|state| {
        state.sign_out();
        state.persist(&LocalStorage);
    });
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/login");
        }
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let role = move || auth.with(AuthState::role);
    let name = move || auth.with(|a| a.user().map(|u| u.display_name().to_owned()).unwrap_or_default());

    view! {
        <nav class="nav-bar">
            <A href="/landing" attr:class="nav-bar__brand">"JobBoard"</A>
            <span class="nav-bar__spacer"></span>
            {move || match role() {
                None => view! {
                    <A href="/login" attr:class="nav-bar__link">"Login"</A>
                    <A href="/signup" attr:class="nav-bar__link">"Sign Up"</A>
                }
                    .into_any(),
                Some(role) => links_for(role)
                    .iter()
                    .map(|(href, label)| view! { <A href=*href attr:class="nav-bar__link">{*label}</A> })
                    .collect_view()
                    .into_any(),
            }}
            <Show when=move || role().is_some()>
                <span class="nav-bar__self">{name}</span>
                <button class="btn nav-bar__logout" on:click=move |_| logout(auth)>"Logout"</button>
            </Show>
        </nav>
    }
}
