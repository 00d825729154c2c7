//! Route wrapper that renders its children only for permitted roles.
//!
//! SYSTEM CONTEXT
//! ==============
//! UX-only gate: refused visitors are sent to the public landing page, but
//! the backend still authorizes every request.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::util::guard::{Access, ProtectedPage};

/// Render `children` when the current session may open `page`.
#[component]
pub fn RequireRole(page: ProtectedPage, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let access = Memo::new(move |_| auth.with(|state| page.check(state)));

    move || match access.get() {
        Access::Pending => view! { <p class="page-status">"Loading..."</p> }.into_any(),
        Access::Allow => children().into_any(),
        Access::Redirect(path) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=path options=options/> }.into_any()
        }
    }
}
