//! Collection report: overdue aggregates for a selected period.

#[cfg(test)]
#[path = "collection_report_test.rs"]
mod collection_report_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::data_table::{CellValue, Column, DataTable};
use crate::components::kpi_card::KpiCard;
use crate::components::period_picker::PeriodPicker;
use crate::net::api;
use crate::net::types::CollectionRow;
use crate::state::reports::{ReportFilter, use_report};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::datetime::{format_date_time, try_format_date_time};
use crate::util::export::{build_csv, download_csv};
use crate::util::money::format_czk;

const CSV_HEADER: [&str; 6] = [
    "Jméno",
    "Telefon",
    "Dlužná částka",
    "Dní po splatnosti",
    "Poslední platba",
    "Přislíbená platba",
];

/// Export rows; missing dates stay empty rather than rendering the
/// on-screen dash.
fn csv_rows(rows: &[CollectionRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.name.clone(),
                row.phone.clone().unwrap_or_default(),
                format!("{:.2}", row.amount_due),
                row.days_overdue.to_string(),
                try_format_date_time(row.last_payment_at.as_deref(), false),
                try_format_date_time(row.promised_payment_at.as_deref(), false),
            ]
        })
        .collect()
}

#[component]
pub fn CollectionReportPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let filter = RwSignal::new(ReportFilter::default());
    let report = use_report(filter.into(), api::fetch_collection_report);

    let rows = Signal::derive(move || {
        report
            .data
            .get()
            .map(|report| report.rows)
            .unwrap_or_default()
    });
    let total_due = Signal::derive(move || {
        report
            .data
            .get()
            .map_or_else(|| "-".to_owned(), |r| format_czk(r.summary.total_due))
    });
    let lead_count = Signal::derive(move || {
        report
            .data
            .get()
            .map_or_else(|| "-".to_owned(), |r| r.summary.lead_count.to_string())
    });
    let avg_overdue = Signal::derive(move || {
        report
            .data
            .get()
            .map_or_else(|| "-".to_owned(), |r| format!("{:.1}", r.summary.avg_days_overdue))
    });

    let on_export = move |_| {
        if let Some(report) = report.data.get_untracked() {
            let csv = build_csv(&CSV_HEADER, &csv_rows(&report.rows));
            download_csv("report-vymahani.csv", &csv);
        }
    };

    let columns = vec![
        Column::text("Jméno", |row: &CollectionRow| CellValue::text(row.name.clone())),
        Column::text("Telefon", |row: &CollectionRow| CellValue::opt(row.phone.clone())),
        Column::text("Dlužná částka", |row: &CollectionRow| {
            CellValue::text(format_czk(row.amount_due))
        }),
        Column::text("Dní po splatnosti", |row: &CollectionRow| {
            CellValue::text(row.days_overdue.to_string())
        }),
        Column::text("Poslední platba", |row: &CollectionRow| {
            CellValue::text(format_date_time(row.last_payment_at.as_deref(), false))
        }),
        Column::text("Přislíbená platba", |row: &CollectionRow| {
            CellValue::text(format_date_time(row.promised_payment_at.as_deref(), false))
        }),
    ];

    view! {
        <div class="report-page">
            <header class="page__header">
                <h1>"Report vymáhání"</h1>
                <PeriodPicker filter=filter/>
                <button class="btn" on:click=move |_| report.refetch()>
                    "Obnovit"
                </button>
                <button
                    class="btn"
                    on:click=on_export
                    disabled=move || report.data.get().is_none()
                >
                    "Export CSV"
                </button>
            </header>

            <Show when=move || report.waiting_for_range.get()>
                <p class="page__hint">"Vyberte rozsah dat."</p>
            </Show>
            <Show when=move || report.loading.get()>
                <p>"Načítání..."</p>
            </Show>
            <Show when=move || report.error.get().is_some()>
                <p class="page__error">{move || report.error.get().unwrap_or_default()}</p>
            </Show>

            <div class="report-page__kpis">
                <KpiCard label="Vymáhaná částka" value=total_due/>
                <KpiCard label="Dlužníků" value=lead_count/>
                <KpiCard label="Průměr dní po splatnosti" value=avg_overdue/>
            </div>

            <DataTable
                rows=rows
                columns=columns.clone()
                empty_message="Žádné pohledávky v období".to_owned()
            />
        </div>
    }
}
