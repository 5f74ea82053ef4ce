use super::*;
use uuid::Uuid;

#[test]
fn csv_rows_keep_missing_dates_empty() {
    let rows = vec![CollectionRow {
        lead_id: Uuid::new_v4(),
        name: "Petr Svoboda".to_owned(),
        phone: None,
        amount_due: 12_345.6,
        days_overdue: 14,
        last_payment_at: Some("2024-01-01T10:00:00Z".to_owned()),
        promised_payment_at: None,
    }];
    let exported = csv_rows(&rows);
    assert_eq!(
        exported,
        vec![vec![
            "Petr Svoboda".to_owned(),
            String::new(),
            "12345.60".to_owned(),
            "14".to_owned(),
            "01.01.2024 11:00".to_owned(),
            String::new(),
        ]]
    );
}

#[test]
fn csv_header_matches_row_width() {
    let rows = vec![CollectionRow {
        lead_id: Uuid::new_v4(),
        name: "Petr Svoboda".to_owned(),
        phone: None,
        amount_due: 0.0,
        days_overdue: 0,
        last_payment_at: None,
        promised_payment_at: None,
    }];
    assert_eq!(csv_rows(&rows)[0].len(), CSV_HEADER.len());
}
