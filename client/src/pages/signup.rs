//! Signup page. A successful registration logs straight in.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::role_tabs::RoleTabs;
use crate::net::types::{Role, SignupForm};
use crate::state::auth::{AuthState, SIGNUP_ROLES, load_last_role, save_last_role, signup_role};
use crate::util::storage::LocalStorage;
use crate::util::validation::validate_signup;

use super::navigation_target;

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let role = RwSignal::new(Role::default());
    let full_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let target = navigation_target();

    Effect::new(move || role.set(signup_role(load_last_role(&LocalStorage))));

    let on_select = Callback::new(move |picked: Role| {
        role.set(picked);
        save_last_role(&LocalStorage, picked);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = SignupForm {
            full_name: full_name.get().trim().to_owned(),
            phone: phone.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            password: password.get(),
            role: role.get(),
        };
        if let Err(msg) = validate_signup(&form) {
            error.set(Some(msg.to_owned()));
            return;
        }
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let api = crate::net::api::ApiClient::browser(None);
            match crate::state::auth::signup(&api, &form).await {
                Ok(session) => {
                    let home = session.user.role.home_path();
                    auth.update(|a| a.sign_in(session));
                    target.set(Some(home));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (auth, target, form);
    };

    let text_input = move |signal: RwSignal<String>, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                class="form-input"
                type=kind
                placeholder=placeholder
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <main class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <RoleTabs roles=SIGNUP_ROLES selected=role on_select=on_select/>
                <form class="auth-form" on:submit=on_submit>
                    {text_input(full_name, "text", "Full name")}
                    {text_input(phone, "tel", "Phone (optional)")}
                    {text_input(email, "email", "you@example.com")}
                    {text_input(password, "password", "Password")}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already registered? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </main>
    }
}
