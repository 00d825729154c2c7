//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure page logic
//! (guards, validation, page math) from components so they stay testable.

pub mod guard;
pub mod pagination;
pub mod storage;
pub mod timers;
pub mod validation;
