//! Payment schedule derivation from lease terms.
//!
//! The backend stores only the lease terms; the installment plan shown to
//! operators and customers is derived client-side by stepping calendar
//! months from the start date.

#[cfg(test)]
#[path = "schedule_test.rs"]
mod schedule_test;

use chrono::{Months, NaiveDate};

use crate::net::types::Lease;
use crate::util::datetime::{TimestampValue, parse_timestamp};

/// One derived installment of a lease.
#[derive(Clone, Debug, PartialEq)]
pub struct Installment {
    pub number: u32,
    pub due_date: Option<NaiveDate>,
    pub amount: f64,
}

/// Derive the full installment plan: one payment per month from the lease
/// start date. Month stepping clamps to the last day of shorter months
/// (a lease starting on the 31st falls due on Feb 28/29).
pub fn payment_schedule(lease: &Lease) -> Vec<Installment> {
    let start = parse_timestamp(&TimestampValue::from(lease.starts_at.as_str()))
        .map(|instant| instant.date_naive());
    (0..lease.duration_months)
        .map(|offset| Installment {
            number: offset + 1,
            due_date: start.and_then(|date| date.checked_add_months(Months::new(offset))),
            amount: lease.monthly_payment,
        })
        .collect()
}
