//! Login page with role tabs and email + password form.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::role_tabs::RoleTabs;
use crate::net::types::Role;
use crate::state::auth::{AuthState, LOGIN_ROLES, load_last_role, save_last_role};
use crate::util::storage::LocalStorage;
use crate::util::validation::validate_login;

use super::navigation_target;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let role = RwSignal::new(Role::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let target = navigation_target();

    Effect::new(move || role.set(load_last_role(&LocalStorage)));

    let on_select = Callback::new(move |picked: Role| {
        role.set(picked);
        save_last_role(&LocalStorage, picked);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(msg) = validate_login(&email_value, &password_value) {
            error.set(Some(msg.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let picked = role.get();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::ApiClient::browser(None);
                match crate::state::auth::login(&api, &email_value, &password_value, picked).await {
                    Ok(session) => {
                        let home = session.user.role.home_path();
                        auth.update(|a| a.sign_in(session));
                        target.set(Some(home));
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, target, password_value);
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <RoleTabs roles=LOGIN_ROLES selected=role on_select=on_select/>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="form-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__switch">
                    "No account yet? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </main>
    }
}
