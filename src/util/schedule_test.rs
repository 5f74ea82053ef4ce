use super::*;

fn lease(starts_at: &str, duration_months: u32) -> Lease {
    Lease {
        vehicle: "Škoda Fabia".to_owned(),
        monthly_payment: 6_500.0,
        duration_months,
        starts_at: starts_at.to_owned(),
        total_price: None,
    }
}

fn due(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[test]
fn schedule_has_one_installment_per_month() {
    let schedule = payment_schedule(&lease("2024-03-01", 36));
    assert_eq!(schedule.len(), 36);
    assert_eq!(schedule[0].number, 1);
    assert_eq!(schedule[35].number, 36);
}

#[test]
fn due_dates_step_by_calendar_months() {
    let schedule = payment_schedule(&lease("2024-03-15", 3));
    let dates: Vec<_> = schedule.iter().map(|i| i.due_date).collect();
    assert_eq!(dates, vec![due("2024-03-15"), due("2024-04-15"), due("2024-05-15")]);
}

#[test]
fn month_end_start_clamps_to_shorter_months() {
    let schedule = payment_schedule(&lease("2024-01-31", 3));
    let dates: Vec<_> = schedule.iter().map(|i| i.due_date).collect();
    // 2024 is a leap year.
    assert_eq!(dates, vec![due("2024-01-31"), due("2024-02-29"), due("2024-03-31")]);
}

#[test]
fn amounts_repeat_the_monthly_payment() {
    let schedule = payment_schedule(&lease("2024-03-01", 2));
    assert!(schedule.iter().all(|i| (i.amount - 6_500.0).abs() < f64::EPSILON));
}

#[test]
fn unparseable_start_date_yields_dateless_installments() {
    let schedule = payment_schedule(&lease("brzy", 2));
    assert_eq!(schedule.len(), 2);
    assert!(schedule.iter().all(|i| i.due_date.is_none()));
}
