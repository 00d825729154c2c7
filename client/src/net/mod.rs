//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` exposes typed backend calls, `transport` is the fetch seam those calls
//! go through, and `types` defines the shared wire schema.

pub mod api;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod types;
