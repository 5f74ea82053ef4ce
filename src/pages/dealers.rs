//! Dealer management table with a searchable city filter.

#[cfg(test)]
#[path = "dealers_test.rs"]
mod dealers_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::data_table::{CellValue, Column, DataTable};
use crate::components::searchable_select::{SearchableSelect, SelectOption};
use crate::net::api;
use crate::net::types::Dealer;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Distinct dealer cities as select options, sorted and deduplicated.
fn city_options(dealers: &[Dealer]) -> Vec<SelectOption> {
    let mut cities: Vec<String> = dealers.iter().map(|dealer| dealer.city.clone()).collect();
    cities.sort();
    cities.dedup();
    cities
        .into_iter()
        .map(|city| SelectOption::new(city.clone(), city))
        .collect()
}

fn filter_by_city(dealers: Vec<Dealer>, city: Option<&str>) -> Vec<Dealer> {
    match city {
        Some(city) => dealers
            .into_iter()
            .filter(|dealer| dealer.city == city)
            .collect(),
        None => dealers,
    }
}

#[component]
pub fn DealersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let dealers = LocalResource::new(|| api::fetch_dealers());
    let selected_city = RwSignal::new(None::<SelectOption>);

    let all_dealers =
        Signal::derive(move || dealers.get().and_then(Result::ok).unwrap_or_default());
    let options = Signal::derive(move || city_options(&all_dealers.get()));
    let rows = Signal::derive(move || {
        let city = selected_city.get();
        filter_by_city(all_dealers.get(), city.as_ref().map(|c| c.value.as_str()))
    });
    let error = move || dealers.get().and_then(Result::err);

    let columns = vec![
        Column::text("Název", |row: &Dealer| CellValue::text(row.name.clone())),
        Column::text("Město", |row: &Dealer| CellValue::text(row.city.clone())),
        Column::text("Aktivní", |row: &Dealer| CellValue::Bool(row.active)),
        Column::text("E-mail", |row: &Dealer| CellValue::opt(row.contact_email.clone())),
        Column::text("Telefon", |row: &Dealer| CellValue::opt(row.phone.clone())),
    ];

    view! {
        <div class="dealers-page">
            <header class="page__header">
                <h1>"Dealeři"</h1>
                <div class="dealers-page__filter">
                    <SearchableSelect
                        options=options
                        selected=selected_city
                        placeholder="Všechna města".to_owned()
                    />
                    <Show when=move || selected_city.get().is_some()>
                        <button class="btn" on:click=move |_| selected_city.set(None)>
                            "Zrušit filtr"
                        </button>
                    </Show>
                </div>
            </header>

            <Show when=move || error().is_some()>
                <p class="page__error">{move || error().unwrap_or_default()}</p>
            </Show>

            <Suspense fallback=move || view! { <p>"Načítání..."</p> }>
                <DataTable
                    rows=rows
                    columns=columns.clone()
                    empty_message="Žádní dealeři".to_owned()
                />
            </Suspense>
        </div>
    }
}
