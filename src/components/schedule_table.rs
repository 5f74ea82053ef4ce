//! Payment schedule table shared by the lead detail and customer portal.

use leptos::prelude::*;

use crate::components::data_table::{CellValue, Column, DataTable};
use crate::net::types::Lease;
use crate::util::money::format_czk;
use crate::util::schedule::{Installment, payment_schedule};

#[component]
pub fn ScheduleTable(#[prop(into)] lease: Signal<Option<Lease>>) -> impl IntoView {
    let rows = Signal::derive(move || {
        lease
            .get()
            .map(|lease| payment_schedule(&lease))
            .unwrap_or_default()
    });

    let columns = vec![
        Column::text("Splátka", |row: &Installment| {
            CellValue::text(format!("{}.", row.number))
        }),
        Column::text("Splatnost", |row: &Installment| {
            CellValue::opt(row.due_date.map(|date| date.format("%d.%m.%Y").to_string()))
        }),
        Column::text("Částka", |row: &Installment| {
            CellValue::text(format_czk(row.amount))
        }),
    ];

    view! {
        <DataTable
            rows=rows
            columns=columns
            empty_message="Splátkový kalendář není k dispozici".to_owned()
        />
    }
}
