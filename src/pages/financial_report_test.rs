use super::*;

#[test]
fn paid_share_is_a_whole_percent() {
    let summary = FinancialSummary {
        total_invoiced: 200_000.0,
        total_paid: 150_000.0,
        total_outstanding: 50_000.0,
    };
    assert_eq!(paid_share(&summary), "75 %");
}

#[test]
fn paid_share_without_invoicing_is_undefined() {
    let summary = FinancialSummary {
        total_invoiced: 0.0,
        total_paid: 0.0,
        total_outstanding: 0.0,
    };
    assert_eq!(paid_share(&summary), "-");
}

#[test]
fn csv_rows_use_plain_decimal_amounts() {
    let rows = vec![FinancialRow {
        month: "2024-03".to_owned(),
        invoiced: 100_000.0,
        paid: 75_000.5,
        outstanding: 24_999.5,
    }];
    assert_eq!(
        csv_rows(&rows),
        vec![vec![
            "2024-03".to_owned(),
            "100000.00".to_owned(),
            "75000.50".to_owned(),
            "24999.50".to_owned(),
        ]]
    );
}
