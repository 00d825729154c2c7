//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let home = move || auth.with(|a| a.role().map(|r| r.home_path()));

    view! {
        <main class="landing-page">
            <section class="landing-hero">
                <h1>"Find your next job"</h1>
                <p class="landing-hero__tagline">
                    "Browse openings, apply in one click and follow every application."
                </p>
                {move || match home() {
                    Some(path) => view! {
                        <A href=path attr:class="btn btn--primary">"Go to dashboard"</A>
                    }
                        .into_any(),
                    None => view! {
                        <A href="/login" attr:class="btn btn--primary">"Login"</A>
                        <A href="/signup" attr:class="btn btn--ghost">"Create an account"</A>
                    }
                        .into_any(),
                }}
            </section>
        </main>
    }
}
