use super::*;

#[test]
fn report_paths_embed_the_query_string() {
    assert_eq!(
        collection_report_path("period=month"),
        "/stats/collection-report?period=month"
    );
    assert_eq!(
        financial_report_path("period=custom&dateFrom=2024-01-01&dateTo=2024-01-31"),
        "/stats/financial-report?period=custom&dateFrom=2024-01-01&dateTo=2024-01-31"
    );
    assert_eq!(
        cc_activity_report_path("period=week"),
        "/stats/cc-activity-report?period=week"
    );
    assert_eq!(it_release_path("period=year"), "/stats/it-release?period=year");
}

#[test]
fn lead_path_formats_expected_path() {
    let id = uuid::uuid!("7f4df5a8-34f5-4e52-9f04-b9f1e52aa0d8");
    assert_eq!(lead_path(id), "/leads/7f4df5a8-34f5-4e52-9f04-b9f1e52aa0d8");
}

#[test]
fn document_path_formats_expected_path() {
    assert_eq!(document_path("smlouva-42.pdf"), "/me/documents/smlouva-42.pdf");
}

#[test]
fn invoice_download_path_formats_expected_path() {
    assert_eq!(invoice_download_path("tok-789"), "/invoices/download/tok-789");
}

#[test]
fn http_failed_message_carries_the_status() {
    assert_eq!(http_failed_message(500), "Server vrátil chybu 500.");
}

#[test]
fn login_failure_distinguishes_bad_credentials() {
    assert_eq!(login_failed_message(401), "Nesprávný e-mail nebo heslo.");
    assert_eq!(login_failed_message(503), "Přihlášení se nezdařilo (503).");
}
