//! Wire DTOs for the Cash&Drive REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend's camelCase JSON so serde handles the
//! boundary in one place. Open-ended backend shapes (document categories)
//! are validated into tagged variants here instead of being indexed loosely
//! by pages.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An authenticated portal user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Backend user roles; unrecognized roles degrade to `Unknown` rather than
/// failing the login deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Operator,
    Customer,
    #[serde(other)]
    Unknown,
}

/// Login form payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Access/refresh token pair, nested under `tokens` in the login response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: PortalUser,
    pub tokens: TokenPair,
}

/// One overdue lead in the collection report and the collection work list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionRow {
    pub lead_id: Uuid,
    pub name: String,
    pub phone: Option<String>,
    pub amount_due: f64,
    pub days_overdue: i64,
    pub last_payment_at: Option<String>,
    pub promised_payment_at: Option<String>,
}

/// Aggregates over the collection rows for the selected period.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
    pub total_due: f64,
    pub lead_count: i64,
    pub avg_days_overdue: f64,
}

/// `GET /stats/collection-report` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionReport {
    pub summary: CollectionSummary,
    pub rows: Vec<CollectionRow>,
}

/// One month of invoicing in the financial report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRow {
    pub month: String,
    pub invoiced: f64,
    pub paid: f64,
    pub outstanding: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub total_invoiced: f64,
    pub total_paid: f64,
    pub total_outstanding: f64,
}

/// `GET /stats/financial-report` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialReport {
    pub summary: FinancialSummary,
    pub rows: Vec<FinancialRow>,
}

/// Per-agent call-center activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CcActivityRow {
    pub agent: String,
    pub calls: i64,
    pub reached: i64,
    pub promises: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CcActivitySummary {
    pub total_calls: i64,
    pub total_reached: i64,
    pub total_promises: i64,
}

/// `GET /stats/cc-activity-report` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CcActivityReport {
    pub summary: CcActivitySummary,
    pub rows: Vec<CcActivityRow>,
}

/// One deployed release in the IT release log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItReleaseRow {
    pub version: String,
    pub released_at: String,
    pub author: Option<String>,
    pub notes: Option<String>,
}

/// `GET /stats/it-release` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItReleaseReport {
    pub rows: Vec<ItReleaseRow>,
}

/// One lead's finance-approval to paid-out interval.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelInterval {
    pub lead_id: Uuid,
    pub finance_approved_at: String,
    pub paid_out_at: String,
    pub duration_hours: i64,
}

/// `GET /leads/timeFunnel/financeToPaidOut` payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelReport {
    pub intervals: Vec<FunnelInterval>,
}

/// A partner dealership.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dealer {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub active: bool,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
}

/// A customer record in the leasing pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: String,
    pub dealer: Option<String>,
    pub created_at: String,
    pub note: Option<String>,
}

/// Contractual lease terms attached to a lead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lease {
    pub vehicle: String,
    pub monthly_payment: f64,
    pub duration_months: u32,
    pub starts_at: String,
    pub total_price: Option<f64>,
}

/// `GET /leads/:id` and `GET /me/lead` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDetail {
    #[serde(flatten)]
    pub lead: Lead,
    pub lease: Option<Lease>,
}

/// A customer invoice.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: Uuid,
    pub number: String,
    pub issued_at: String,
    pub due_at: String,
    pub amount: f64,
    pub paid: bool,
    pub download_token: Option<String>,
}

/// A vehicle photo in the customer gallery.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: Uuid,
    pub url: String,
    pub taken_at: Option<String>,
    pub caption: Option<String>,
}

/// Validated document categories; anything the backend adds later lands in
/// `Other` instead of breaking the documents page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DocumentCategory {
    Contract,
    TechnicalInspection,
    Insurance,
    Handover,
    #[serde(other)]
    Other,
}

impl DocumentCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Contract => "Smlouva",
            Self::TechnicalInspection => "Technická prohlídka",
            Self::Insurance => "Pojištění",
            Self::Handover => "Předávací protokol",
            Self::Other => "Ostatní",
        }
    }
}

/// A downloadable customer document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub file: String,
    pub name: String,
    pub category: DocumentCategory,
    pub uploaded_at: Option<String>,
}
