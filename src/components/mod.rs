//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and generic widgets while reading/writing
//! shared state from Leptos context providers.

pub mod data_table;
pub mod kpi_card;
pub mod period_picker;
pub mod schedule_table;
pub mod searchable_select;
pub mod top_bar;
