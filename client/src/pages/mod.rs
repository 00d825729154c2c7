//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, polling, action
//! round-trips) and delegates rendering details to `components`.

pub mod admin;
pub mod dashboard;
pub mod employer_dashboard;
pub mod home;
pub mod job_details;
pub mod jobs;
pub(crate) mod listing;
pub mod landing;
pub mod login;
pub mod signup;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Signal that navigates to whatever path is written into it.
///
/// Async handlers cannot hold the router's navigate closure, so they set a
/// target and this effect performs the navigation on the next tick.
pub(crate) fn navigation_target() -> RwSignal<Option<&'static str>> {
    let target = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(path, NavigateOptions::default());
        }
    });
    target
}
