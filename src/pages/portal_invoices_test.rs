use super::*;
use uuid::Uuid;

fn invoice(amount: f64, paid: bool) -> Invoice {
    Invoice {
        id: Uuid::new_v4(),
        number: "2024-0001".to_owned(),
        issued_at: "2024-04-01T00:00:00Z".to_owned(),
        due_at: "2024-04-15T00:00:00Z".to_owned(),
        amount,
        paid,
        download_token: None,
    }
}

#[test]
fn unpaid_total_sums_only_open_invoices() {
    let invoices = vec![invoice(8_500.0, true), invoice(8_500.0, false), invoice(1_200.0, false)];
    assert!((unpaid_total(&invoices) - 9_700.0).abs() < f64::EPSILON);
}

#[test]
fn unpaid_total_of_settled_invoices_is_zero() {
    let invoices = vec![invoice(8_500.0, true)];
    assert!((unpaid_total(&invoices)).abs() < f64::EPSILON);
}

#[test]
fn invoice_filename_embeds_the_number() {
    assert_eq!(invoice_filename("2024-0042"), "faktura-2024-0042.pdf");
}
