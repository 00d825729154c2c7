//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `jobs`, `seeker`, `employer`, `admin`)
//! so each page depends on one small focused model. Only `auth` is provided
//! app-wide; the rest are page-scoped signals.

pub mod admin;
pub mod auth;
pub mod employer;
pub mod jobs;
pub mod seeker;
