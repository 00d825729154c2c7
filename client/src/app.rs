//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::require_role::RequireRole;
use crate::pages::{
    admin::AdminPage, dashboard::DashboardPage, employer_dashboard::EmployerDashboardPage, home::HomePage,
    job_details::JobDetailsPage, jobs::JobsPage, landing::LandingPage, login::LoginPage, signup::SignupPage,
};
use crate::state::auth::AuthState;
use crate::util::guard::{FALLBACK_PATH, ProtectedPage};
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Unknown paths land on the public landing page.
#[component]
fn NotFound() -> impl IntoView {
    let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
    view! { <Redirect path=FALLBACK_PATH options=options/> }
}

/// Root application component.
///
/// Provides the session context, keeps it mirrored in localStorage and sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    provide_context(auth);

    // Effects only run in the browser, after hydration.
    Effect::new(move || auth.set(AuthState::restore(&LocalStorage)));
    Effect::new(move || auth.with(|state| state.persist(&LocalStorage)));

    view! {
        <Stylesheet id="leptos" href="/pkg/jobboard.css"/>
        <Title text="JobBoard"/>

        <Router>
            <NavBar/>
            <Routes fallback=NotFound>
                <Route path=StaticSegment("landing") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RequireRole page=ProtectedPage::Home><HomePage/></RequireRole> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <RequireRole page=ProtectedPage::SeekerDashboard><DashboardPage/></RequireRole> }
                />
                <Route
                    path=StaticSegment("employer-dashboard")
                    view=|| {
                        view! { <RequireRole page=ProtectedPage::EmployerDashboard><EmployerDashboardPage/></RequireRole> }
                    }
                />
                <Route
                    path=StaticSegment("jobs")
                    view=|| view! { <RequireRole page=ProtectedPage::Jobs><JobsPage/></RequireRole> }
                />
                <Route
                    path=(StaticSegment("jobs"), ParamSegment("id"))
                    view=|| view! { <RequireRole page=ProtectedPage::JobDetails><JobDetailsPage/></RequireRole> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <RequireRole page=ProtectedPage::Admin><AdminPage/></RequireRole> }
                />
            </Routes>
        </Router>
    }
}
