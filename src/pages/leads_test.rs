use super::*;
use uuid::Uuid;

fn row(name: &str, days_overdue: i64) -> CollectionRow {
    CollectionRow {
        lead_id: Uuid::new_v4(),
        name: name.to_owned(),
        phone: None,
        amount_due: 10_000.0,
        days_overdue,
        last_payment_at: None,
        promised_payment_at: None,
    }
}

#[test]
fn most_overdue_leads_come_first() {
    let sorted = sorted_by_overdue(vec![row("Adam", 5), row("Cyril", 40), row("Beda", 12)]);
    let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Cyril", "Beda", "Adam"]);
}

#[test]
fn ties_resolve_alphabetically() {
    let sorted = sorted_by_overdue(vec![row("Zdena", 10), row("Alena", 10)]);
    let names: Vec<&str> = sorted.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Alena", "Zdena"]);
}

#[test]
fn empty_input_stays_empty() {
    assert!(sorted_by_overdue(vec![]).is_empty());
}
