//! IT release log: deployments in the selected period, newest first.

#[cfg(test)]
#[path = "it_release_report_test.rs"]
mod it_release_report_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::data_table::{CellValue, Column, DataTable};
use crate::components::period_picker::PeriodPicker;
use crate::net::api;
use crate::net::types::ItReleaseRow;
use crate::state::reports::{ReportFilter, use_report};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::datetime::{TimestampValue, format_date_time, parse_timestamp};

/// Newest release first; rows with unparseable timestamps sink to the end.
fn sorted_releases(mut rows: Vec<ItReleaseRow>) -> Vec<ItReleaseRow> {
    rows.sort_by_key(|row| {
        std::cmp::Reverse(parse_timestamp(&TimestampValue::from(row.released_at.as_str())))
    });
    rows
}

#[component]
pub fn ItReleaseReportPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let filter = RwSignal::new(ReportFilter::default());
    let report = use_report(filter.into(), api::fetch_it_release_report);

    let rows = Signal::derive(move || {
        report
            .data
            .get()
            .map(|report| sorted_releases(report.rows))
            .unwrap_or_default()
    });

    let columns = vec![
        Column::text("Verze", |row: &ItReleaseRow| CellValue::text(row.version.clone())),
        Column::text("Nasazeno", |row: &ItReleaseRow| {
            // Deploy timestamps are read to the second when correlating
            // releases with incidents.
            CellValue::text(format_date_time(Some(row.released_at.as_str()), true))
        }),
        Column::text("Autor", |row: &ItReleaseRow| CellValue::opt(row.author.clone())),
        Column::text("Poznámka", |row: &ItReleaseRow| CellValue::opt(row.notes.clone())),
    ];

    view! {
        <div class="report-page">
            <header class="page__header">
                <h1>"IT release"</h1>
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

            <DataTable
                rows=rows
                columns=columns.clone()
                empty_message="Žádné nasazení v období".to_owned()
            />
        </div>
    }
}
