//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render listing cards, forms and navigation chrome while
//! reading/writing shared state from Leptos context providers.

pub mod employer_applications;
pub mod interview_scheduler;
pub mod job_card;
pub mod job_post_form;
pub mod nav_bar;
pub mod pager;
pub mod require_role;
pub mod role_tabs;
