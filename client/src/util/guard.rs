//! Role-based route gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through `components::require_role`, which
//! asks `check_access` what to do. The guard only improves UX; the backend
//! still authorizes every call.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::auth::AuthState;

/// Public page every refused navigation lands on.
pub const FALLBACK_PATH: &str = "/landing";

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    /// Stored session not read yet; render a placeholder.
    Pending,
    Allow,
    Redirect(&'static str),
}

/// Allow when a user is signed in and `allowed` is empty or lists their role.
pub fn check_access(auth: &AuthState, allowed: &[Role]) -> Access {
    if auth.loading {
        return Access::Pending;
    }
    match auth.role() {
        Some(role) if allowed.is_empty() || allowed.contains(&role) => Access::Allow,
        _ => Access::Redirect(FALLBACK_PATH),
    }
}

/// Role-gated views and who may open them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProtectedPage {
    Home,
    SeekerDashboard,
    EmployerDashboard,
    Jobs,
    JobDetails,
    Admin,
}

impl ProtectedPage {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::SeekerDashboard,
        Self::EmployerDashboard,
        Self::Jobs,
        Self::JobDetails,
        Self::Admin,
    ];

    pub fn allowed_roles(self) -> &'static [Role] {
        match self {
            Self::Home => &[Role::JobSeeker, Role::Employer, Role::Admin],
            Self::SeekerDashboard => &[Role::JobSeeker],
            Self::EmployerDashboard => &[Role::Employer],
            Self::Jobs | Self::JobDetails => &[Role::JobSeeker, Role::Employer],
            Self::Admin => &[Role::Admin],
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SeekerDashboard => "/dashboard",
            Self::EmployerDashboard => "/employer-dashboard",
            Self::Jobs => "/jobs",
            Self::JobDetails => "/jobs/:id",
            Self::Admin => "/admin",
        }
    }

    pub fn check(self, auth: &AuthState) -> Access {
        check_access(auth, self.allowed_roles())
    }
}
