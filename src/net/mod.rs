//! Networking modules for the REST backend boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and blob downloads, `types` defines the shared
//! wire schema. The backend itself is externally owned.

pub mod api;
pub mod types;
