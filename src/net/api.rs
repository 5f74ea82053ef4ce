//! REST API helpers for communicating with the Cash&Drive backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! access token attached as a bearer header. Server-side (SSR): stubs
//! returning errors since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs with Czech display strings so a
//! failed fetch degrades to an inline page message without crashing
//! hydration. No call is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use uuid::Uuid;

use super::types::{
    CcActivityReport, CollectionReport, CollectionRow, Credentials, Dealer, Document,
    FinancialReport, FunnelReport, GalleryImage, Invoice, ItReleaseReport, LeadDetail,
    LoginResponse,
};

/// Backend base URL, fixed at compile time.
pub const API_BASE: &str = match option_env!("CASHDRIVE_API_URL") {
    Some(url) => url,
    None => "http://localhost:4000",
};

/// Fallback display message when no structured error is available.
pub const FETCH_FAILED: &str = "Nepodařilo se načíst data.";

#[cfg(any(test, feature = "hydrate"))]
fn http_failed_message(status: u16) -> String {
    format!("Server vrátil chybu {status}.")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 {
        "Nesprávný e-mail nebo heslo.".to_owned()
    } else {
        format!("Přihlášení se nezdařilo ({status}).")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn collection_report_path(query: &str) -> String {
    format!("/stats/collection-report?{query}")
}

#[cfg(any(test, feature = "hydrate"))]
fn financial_report_path(query: &str) -> String {
    format!("/stats/financial-report?{query}")
}

#[cfg(any(test, feature = "hydrate"))]
fn cc_activity_report_path(query: &str) -> String {
    format!("/stats/cc-activity-report?{query}")
}

#[cfg(any(test, feature = "hydrate"))]
fn it_release_path(query: &str) -> String {
    format!("/stats/it-release?{query}")
}

#[cfg(any(test, feature = "hydrate"))]
fn lead_path(id: Uuid) -> String {
    format!("/leads/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn document_path(file: &str) -> String {
    format!("/me/documents/{file}")
}

#[cfg(any(test, feature = "hydrate"))]
fn invoice_download_path(token: &str) -> String {
    format!("/invoices/download/{token}")
}

/// Attach the stored access token, when present.
#[cfg(feature = "hydrate")]
fn authorized(request: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::storage::load_string(crate::state::session::TOKEN_KEY) {
        Some(token) => request.header("Authorization", &format!("Bearer {token}")),
        None => request,
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let url = format!("{API_BASE}{path}");
    let response = authorized(gloo_net::http::Request::get(&url))
        .send()
        .await
        .map_err(|_| FETCH_FAILED.to_owned())?;
    if !response.ok() {
        return Err(http_failed_message(response.status()));
    }
    response.json::<T>().await.map_err(|_| FETCH_FAILED.to_owned())
}

#[cfg(feature = "hydrate")]
async fn get_bytes(path: &str) -> Result<Vec<u8>, String> {
    let url = format!("{API_BASE}{path}");
    let response = authorized(gloo_net::http::Request::get(&url))
        .send()
        .await
        .map_err(|_| FETCH_FAILED.to_owned())?;
    if !response.ok() {
        return Err(http_failed_message(response.status()));
    }
    response.binary().await.map_err(|_| FETCH_FAILED.to_owned())
}

/// Authenticate via `POST /auth/login`. The response nests the token pair
/// under `tokens`; persistence is the caller's concern.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/auth/login");
        let response = gloo_net::http::Request::post(&url)
            .json(credentials)
            .map_err(|_| FETCH_FAILED.to_owned())?
            .send()
            .await
            .map_err(|_| FETCH_FAILED.to_owned())?;
        if !response.ok() {
            return Err(login_failed_message(response.status()));
        }
        response
            .json::<LoginResponse>()
            .await
            .map_err(|_| FETCH_FAILED.to_owned())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err("not available on server".to_owned())
    }
}

/// Best-effort server-side session invalidation via `POST /auth/logout`.
/// Errors are swallowed; local teardown must never depend on this call.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("{API_BASE}/auth/logout");
        let _ = authorized(gloo_net::http::Request::post(&url)).send().await;
    }
}

pub async fn fetch_collection_report(query: String) -> Result<CollectionReport, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&collection_report_path(&query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

pub async fn fetch_financial_report(query: String) -> Result<FinancialReport, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&financial_report_path(&query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

pub async fn fetch_cc_activity_report(query: String) -> Result<CcActivityReport, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&cc_activity_report_path(&query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

pub async fn fetch_it_release_report(query: String) -> Result<ItReleaseReport, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&it_release_path(&query)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = query;
        Err("not available on server".to_owned())
    }
}

/// Current overdue leads for the collection work list.
pub async fn fetch_leads_collection() -> Result<Vec<CollectionRow>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/leads/collection").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

pub async fn fetch_lead(id: Uuid) -> Result<LeadDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&lead_path(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err("not available on server".to_owned())
    }
}

pub async fn fetch_time_funnel() -> Result<FunnelReport, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/leads/timeFunnel/financeToPaidOut").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

pub async fn fetch_dealers() -> Result<Vec<Dealer>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/dealers").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// The signed-in customer's own lead and lease.
pub async fn fetch_my_lead() -> Result<LeadDetail, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/me/lead").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

pub async fn fetch_my_gallery() -> Result<Vec<GalleryImage>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/me/gallery").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

pub async fn fetch_my_invoices() -> Result<Vec<Invoice>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/me/invoices").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

pub async fn fetch_my_documents() -> Result<Vec<Document>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/me/documents").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Download a customer document blob and hand it to the browser under the
/// document's display name.
pub async fn download_document(file: String, name: String) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let bytes = get_bytes(&document_path(&file)).await?;
        crate::util::export::save_bytes(&name, "application/octet-stream", &bytes);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (file, name);
        Err("not available on server".to_owned())
    }
}

/// Download an invoice PDF via its single-use token.
pub async fn download_invoice(token: String, filename: String) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let bytes = get_bytes(&invoice_download_path(&token)).await?;
        crate::util::export::save_bytes(&filename, "application/pdf", &bytes);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, filename);
        Err("not available on server".to_owned())
    }
}
