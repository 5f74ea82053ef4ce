//! Utility helpers shared across portal UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure data
//! transformation from page and component logic to improve reuse and
//! testability.

pub mod auth;
pub mod datetime;
pub mod export;
pub mod funnel;
pub mod money;
pub mod schedule;
pub mod storage;
