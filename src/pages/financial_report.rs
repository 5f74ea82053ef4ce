//! Financial report: invoicing per month for a selected period.

#[cfg(test)]
#[path = "financial_report_test.rs"]
mod financial_report_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::data_table::{CellValue, Column, DataTable};
use crate::components::kpi_card::KpiCard;
use crate::components::period_picker::PeriodPicker;
use crate::net::api;
use crate::net::types::{FinancialRow, FinancialSummary};
use crate::state::reports::{ReportFilter, use_report};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::export::{build_csv, download_csv};
use crate::util::money::format_czk;

const CSV_HEADER: [&str; 4] = ["Měsíc", "Vyfakturováno", "Zaplaceno", "Po splatnosti"];

fn csv_rows(rows: &[FinancialRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| {
            vec![
                row.month.clone(),
                format!("{:.2}", row.invoiced),
                format!("{:.2}", row.paid),
                format!("{:.2}", row.outstanding),
            ]
        })
        .collect()
}

/// Share of invoiced volume already paid, as a whole percent. Undefined
/// (dash) when nothing was invoiced.
fn paid_share(summary: &FinancialSummary) -> String {
    if summary.total_invoiced <= 0.0 {
        return "-".to_owned();
    }
    format!("{:.0} %", summary.total_paid / summary.total_invoiced * 100.0)
}

#[component]
pub fn FinancialReportPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let filter = RwSignal::new(ReportFilter::default());
    let report = use_report(filter.into(), api::fetch_financial_report);

    let rows = Signal::derive(move || {
        report
            .data
            .get()
            .map(|report| report.rows)
            .unwrap_or_default()
    });
    let total_invoiced = Signal::derive(move || {
        report
            .data
            .get()
            .map_or_else(|| "-".to_owned(), |r| format_czk(r.summary.total_invoiced))
    });
    let total_paid = Signal::derive(move || {
        report
            .data
            .get()
            .map_or_else(|| "-".to_owned(), |r| format_czk(r.summary.total_paid))
    });
    let share = Signal::derive(move || {
        report
            .data
            .get()
            .map_or_else(|| "-".to_owned(), |r| paid_share(&r.summary))
    });

    let on_export = move |_| {
        if let Some(report) = report.data.get_untracked() {
            let csv = build_csv(&CSV_HEADER, &csv_rows(&report.rows));
            download_csv("financni-report.csv", &csv);
        }
    };

    let columns = vec![
        Column::text("Měsíc", |row: &FinancialRow| CellValue::text(row.month.clone())),
        Column::text("Vyfakturováno", |row: &FinancialRow| {
            CellValue::text(format_czk(row.invoiced))
        }),
        Column::text("Zaplaceno", |row: &FinancialRow| CellValue::text(format_czk(row.paid))),
        Column::text("Po splatnosti", |row: &FinancialRow| {
            CellValue::text(format_czk(row.outstanding))
        }),
    ];

    view! {
        <div class="report-page">
            <header class="page__header">
                <h1>"Finanční report"</h1>
                <PeriodPicker filter=filter/>
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
                <KpiCard label="Vyfakturováno" value=total_invoiced/>
                <KpiCard label="Zaplaceno" value=total_paid/>
                <KpiCard label="Podíl zaplaceného" value=share/>
            </div>

            <DataTable
                rows=rows
                columns=columns.clone()
                empty_message="Žádná fakturace v období".to_owned()
            />
        </div>
    }
}
