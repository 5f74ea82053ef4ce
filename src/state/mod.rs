//! Shared reactive state provided through Leptos contexts.

pub mod reports;
pub mod session;
