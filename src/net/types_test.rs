use super::*;

#[test]
fn login_response_parses_nested_tokens() {
    let raw = serde_json::json!({
        "user": {
            "id": "7f4df5a8-34f5-4e52-9f04-b9f1e52aa0d8",
            "name": "Jana Nováková",
            "email": "jana@cashdrive.cz",
            "role": "operator"
        },
        "tokens": {
            "accessToken": "acc-123",
            "refreshToken": "ref-456"
        }
    });
    let parsed: LoginResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.tokens.access_token, "acc-123");
    assert_eq!(parsed.tokens.refresh_token, "ref-456");
    assert_eq!(parsed.user.role, UserRole::Operator);
}

#[test]
fn unknown_user_role_degrades_instead_of_failing() {
    let parsed: UserRole = serde_json::from_value(serde_json::json!("superadmin")).unwrap();
    assert_eq!(parsed, UserRole::Unknown);
}

#[test]
fn lead_detail_flattens_lead_fields() {
    let raw = serde_json::json!({
        "id": "a3d1f0cb-5f93-47b2-8f2e-6f8f7f1b9c11",
        "name": "Petr Svoboda",
        "email": null,
        "phone": "+420777123456",
        "status": "active",
        "dealer": "AutoCentrum Brno",
        "createdAt": "2024-02-01T08:00:00Z",
        "note": null,
        "lease": {
            "vehicle": "Škoda Octavia",
            "monthlyPayment": 8500.0,
            "durationMonths": 36,
            "startsAt": "2024-03-01",
            "totalPrice": 306000.0
        }
    });
    let parsed: LeadDetail = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.lead.name, "Petr Svoboda");
    assert_eq!(parsed.lease.as_ref().unwrap().duration_months, 36);
}

#[test]
fn document_category_accepts_known_values() {
    let parsed: DocumentCategory =
        serde_json::from_value(serde_json::json!("technicalInspection")).unwrap();
    assert_eq!(parsed, DocumentCategory::TechnicalInspection);
}

#[test]
fn unknown_document_category_becomes_other() {
    let parsed: DocumentCategory = serde_json::from_value(serde_json::json!("leasingAddendum")).unwrap();
    assert_eq!(parsed, DocumentCategory::Other);
}

#[test]
fn invoice_parses_camel_case_fields() {
    let raw = serde_json::json!({
        "id": "03b7ff5e-11f0-4dd8-8f7a-1f2a3b4c5d6e",
        "number": "2024-0042",
        "issuedAt": "2024-04-01T00:00:00Z",
        "dueAt": "2024-04-15T00:00:00Z",
        "amount": 8500.0,
        "paid": false,
        "downloadToken": "tok-789"
    });
    let parsed: Invoice = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed.number, "2024-0042");
    assert!(!parsed.paid);
    assert_eq!(parsed.download_token.as_deref(), Some("tok-789"));
}

#[test]
fn collection_report_round_trips() {
    let report = CollectionReport {
        summary: CollectionSummary {
            total_due: 125_000.0,
            lead_count: 3,
            avg_days_overdue: 18.5,
        },
        rows: vec![],
    };
    let raw = serde_json::to_value(&report).unwrap();
    assert_eq!(raw["summary"]["totalDue"], 125_000.0);
    let parsed: CollectionReport = serde_json::from_value(raw).unwrap();
    assert_eq!(parsed, report);
}
