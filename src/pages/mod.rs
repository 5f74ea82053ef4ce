//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetching, filters, redirects)
//! and delegates rendering details to `components`.

pub mod cc_activity_report;
pub mod collection_report;
pub mod dashboard;
pub mod dealers;
pub mod financial_report;
pub mod it_release_report;
pub mod lead_detail;
pub mod leads;
pub mod login;
pub mod portal;
pub mod portal_documents;
pub mod portal_invoices;
