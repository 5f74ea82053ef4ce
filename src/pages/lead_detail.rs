//! Lead detail page: identity, lease terms, and the derived payment plan.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use uuid::Uuid;

use crate::components::schedule_table::ScheduleTable;
use crate::net::api;
use crate::net::types::{Lead, Lease};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::datetime::{format_date, format_date_time};
use crate::util::money::format_czk;

#[component]
fn DetailRow(#[prop(into)] label: String, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="detail__row">
            <span class="detail__label">{label}</span>
            <span class="detail__value">{value}</span>
        </div>
    }
}

fn lead_section(lead: Lead) -> impl IntoView {
    view! {
        <section class="detail__section">
            <h2>{lead.name}</h2>
            <DetailRow label="Stav" value=lead.status/>
            <DetailRow label="E-mail" value=lead.email.unwrap_or_else(|| "-".to_owned())/>
            <DetailRow label="Telefon" value=lead.phone.unwrap_or_else(|| "-".to_owned())/>
            <DetailRow label="Dealer" value=lead.dealer.unwrap_or_else(|| "-".to_owned())/>
            <DetailRow label="Vytvořeno" value=format_date_time(Some(lead.created_at.as_str()), false)/>
            <DetailRow label="Poznámka" value=lead.note.unwrap_or_else(|| "-".to_owned())/>
        </section>
    }
}

fn lease_section(lease: Option<Lease>) -> impl IntoView {
    view! {
        <section class="detail__section">
            <h2>"Smlouva"</h2>
            {match lease {
                Some(lease) => {
                    view! {
                        <div>
                            <DetailRow label="Vozidlo" value=lease.vehicle/>
                            <DetailRow label="Měsíční splátka" value=format_czk(lease.monthly_payment)/>
                            <DetailRow label="Délka" value=format!("{} měsíců", lease.duration_months)/>
                            <DetailRow label="Začátek" value=format_date(Some(lease.starts_at.as_str()))/>
                            <DetailRow
                                label="Celková cena"
                                value=lease.total_price.map_or_else(|| "-".to_owned(), format_czk)
                            />
                        </div>
                    }
                        .into_any()
                }
                None => view! { <p>"Bez aktivní smlouvy."</p> }.into_any(),
            }}
        </section>
    }
}

#[component]
pub fn LeadDetailPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let params = use_params_map();
    let lead_id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| Uuid::parse_str(&raw).ok())
    };

    let detail = LocalResource::new(move || {
        let id = lead_id();
        async move {
            match id {
                Some(id) => api::fetch_lead(id).await,
                None => Err("Neplatný odkaz.".to_owned()),
            }
        }
    });

    let lease = Signal::derive(move || {
        detail
            .get()
            .and_then(Result::ok)
            .and_then(|detail| detail.lease)
    });

    view! {
        <div class="lead-detail-page">
            <header class="page__header">
                <h1>"Detail klienta"</h1>
                <a href="/leads" class="page__back">"Zpět na seznam"</a>
            </header>

            <Suspense fallback=move || view! { <p>"Načítání..."</p> }>
                {move || {
                    detail
                        .get()
                        .map(|result| match result {
                            Ok(detail) => {
                                view! {
                                    <div class="detail">
                                        {lead_section(detail.lead)}
                                        {lease_section(detail.lease)}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                        })
                }}
            </Suspense>

            <section class="detail__section">
                <h2>"Splátkový kalendář"</h2>
                <ScheduleTable lease=lease/>
            </section>
        </div>
    }
}
