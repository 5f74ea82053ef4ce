//! Call-center activity report: per-agent reach and promise counts.

#[cfg(test)]
#[path = "cc_activity_report_test.rs"]
mod cc_activity_report_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::data_table::{CellValue, Column, DataTable};
use crate::components::kpi_card::KpiCard;
use crate::components::period_picker::PeriodPicker;
use crate::net::api;
use crate::net::types::CcActivityRow;
use crate::state::reports::{ReportFilter, use_report};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Whole-percent share of calls that reached the debtor; undefined (dash)
/// for agents without calls.
#[allow(clippy::cast_precision_loss)]
fn reach_rate(calls: i64, reached: i64) -> String {
    if calls <= 0 {
        return "-".to_owned();
    }
    format!("{:.0} %", reached as f64 / calls as f64 * 100.0)
}

#[component]
pub fn CcActivityReportPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let filter = RwSignal::new(ReportFilter::default());
    let report = use_report(filter.into(), api::fetch_cc_activity_report);

    let rows = Signal::derive(move || {
        report
            .data
            .get()
            .map(|report| report.rows)
            .unwrap_or_default()
    });
    let total_calls = Signal::derive(move || {
        report
            .data
            .get()
            .map_or_else(|| "-".to_owned(), |r| r.summary.total_calls.to_string())
    });
    let total_reached = Signal::derive(move || {
        report
            .data
            .get()
            .map_or_else(|| "-".to_owned(), |r| r.summary.total_reached.to_string())
    });
    let overall_rate = Signal::derive(move || {
        report
            .data
            .get()
            .map_or_else(
                || "-".to_owned(),
                |r| reach_rate(r.summary.total_calls, r.summary.total_reached),
            )
    });

    let columns = vec![
        Column::text("Operátor", |row: &CcActivityRow| CellValue::text(row.agent.clone())),
        Column::text("Hovorů", |row: &CcActivityRow| {
            CellValue::text(row.calls.to_string())
        }),
        Column::text("Dovoláno", |row: &CcActivityRow| {
            CellValue::text(row.reached.to_string())
        }),
        Column::text("Úspěšnost", |row: &CcActivityRow| {
            CellValue::text(reach_rate(row.calls, row.reached))
        }),
        Column::text("Přísliby platby", |row: &CcActivityRow| {
            CellValue::text(row.promises.to_string())
        }),
    ];

    view! {
        <div class="report-page">
            <header class="page__header">
                <h1>"Aktivita call centra"</h1>
                <PeriodPicker filter=filter/>
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
                <KpiCard label="Hovorů" value=total_calls/>
                <KpiCard label="Dovoláno" value=total_reached/>
                <KpiCard label="Úspěšnost" value=overall_rate/>
            </div>

            <DataTable
                rows=rows
                columns=columns.clone()
                empty_message="Žádná aktivita v období".to_owned()
            />
        </div>
    }
}
