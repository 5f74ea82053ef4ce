//! Collection work list: overdue leads sorted by severity.

#[cfg(test)]
#[path = "leads_test.rs"]
mod leads_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::data_table::{CellValue, Column, DataTable};
use crate::net::api;
use crate::net::types::CollectionRow;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::datetime::format_date_time;
use crate::util::money::format_czk;

/// Most overdue first; ties resolve alphabetically for a stable list.
fn sorted_by_overdue(mut rows: Vec<CollectionRow>) -> Vec<CollectionRow> {
    rows.sort_by(|a, b| {
        b.days_overdue
            .cmp(&a.days_overdue)
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}

#[component]
pub fn LeadsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let leads = LocalResource::new(|| api::fetch_leads_collection());
    let rows = Signal::derive(move || {
        leads
            .get()
            .and_then(Result::ok)
            .map(sorted_by_overdue)
            .unwrap_or_default()
    });
    let error = move || leads.get().and_then(Result::err);

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

    let navigate = use_navigate();
    let on_row_click = Callback::new(move |row: CollectionRow| {
        navigate(&format!("/leads/{}", row.lead_id), NavigateOptions::default());
    });

    view! {
        <div class="leads-page">
            <header class="page__header">
                <h1>"Vymáhání"</h1>
            </header>

            <Show when=move || error().is_some()>
                <p class="page__error">{move || error().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Načítání..."</p> }>
                <DataTable
                    rows=rows
                    columns=columns.clone()
                    empty_message="Žádné pohledávky po splatnosti".to_owned()
                    on_row_click=on_row_click
                />
            </Suspense>
        </div>
    }
}
