//! Customer invoices with per-row PDF download.

#[cfg(test)]
#[path = "portal_invoices_test.rs"]
mod portal_invoices_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::data_table::{CellValue, Column, DataTable};
use crate::components::kpi_card::KpiCard;
use crate::net::api;
use crate::net::types::Invoice;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::datetime::format_date;
use crate::util::money::format_czk;

fn unpaid_total(invoices: &[Invoice]) -> f64 {
    invoices
        .iter()
        .filter(|invoice| !invoice.paid)
        .map(|invoice| invoice.amount)
        .sum()
}

fn invoice_filename(number: &str) -> String {
    format!("faktura-{number}.pdf")
}

fn download_cell(row: &Invoice) -> AnyView {
    match row.download_token.clone() {
        Some(token) => {
            let filename = invoice_filename(&row.number);
            view! {
                <button
                    class="btn btn--small"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        #[cfg(feature = "hydrate")]
                        {
                            let token = token.clone();
                            let filename = filename.clone();
                            leptos::task::spawn_local(async move {
                                if let Err(message) =
                                    crate::net::api::download_invoice(token, filename).await
                                {
                                    log::warn!("invoice download failed: {message}");
                                }
                            });
                        }
                        #[cfg(not(feature = "hydrate"))]
                        {
                            let _ = (&token, &filename);
                        }
                    }
                >
                    "Stáhnout"
                </button>
            }
            .into_any()
        }
        None => view! { <span>"-"</span> }.into_any(),
    }
}

#[component]
pub fn PortalInvoicesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let invoices = LocalResource::new(|| api::fetch_my_invoices());
    let rows = Signal::derive(move || invoices.get().and_then(Result::ok).unwrap_or_default());
    let error = move || invoices.get().and_then(Result::err);
    let outstanding = Signal::derive(move || format_czk(unpaid_total(&rows.get())));

    let columns = vec![
        Column::text("Číslo", |row: &Invoice| CellValue::text(row.number.clone())),
        Column::text("Vystavena", |row: &Invoice| {
            CellValue::text(format_date(Some(row.issued_at.as_str())))
        }),
        Column::text("Splatnost", |row: &Invoice| {
            CellValue::text(format_date(Some(row.due_at.as_str())))
        }),
        Column::text("Částka", |row: &Invoice| CellValue::text(format_czk(row.amount))),
        Column::text("Zaplaceno", |row: &Invoice| CellValue::Bool(row.paid)),
        Column::view("", download_cell),
    ];

    view! {
        <div class="portal-page">
            <header class="page__header">
                <h1>"Faktury"</h1>
                <KpiCard label="Zbývá uhradit" value=outstanding/>
            </header>

            <Show when=move || error().is_some()>
                <p class="page__error">{move || error().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Načítání..."</p> }>
                <DataTable
                    rows=rows
                    columns=columns.clone()
                    empty_message="Žádné faktury".to_owned()
                />
            </Suspense>
        </div>
    }
}
