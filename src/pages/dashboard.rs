//! Dashboard page with KPI cards and the payout funnel overview.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::kpi_card::KpiCard;
use crate::components::period_picker::PeriodPicker;
use crate::net::api;
use crate::net::types::FunnelReport;
use crate::state::reports::{ReportFilter, use_report};
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::funnel::{bucket_durations, format_duration_hours, median_hours};
use crate::util::money::format_czk;

/// A money KPI, or the placeholder dash while data is missing.
fn kpi_money(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_owned(), format_czk)
}

/// A count KPI, or the placeholder dash while data is missing.
fn kpi_count(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_owned(), |count| count.to_string())
}

fn funnel_hours(report: &FunnelReport) -> Vec<i64> {
    report
        .intervals
        .iter()
        .map(|interval| interval.duration_hours)
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    install_unauth_redirect(session, use_navigate());

    let filter = RwSignal::new(ReportFilter::default());
    let financial = use_report(filter.into(), api::fetch_financial_report);
    let collection = use_report(filter.into(), api::fetch_collection_report);
    let funnel = LocalResource::new(|| api::fetch_time_funnel());

    let total_due = Signal::derive(move || {
        kpi_money(collection.data.get().map(|report| report.summary.total_due))
    });
    let lead_count = Signal::derive(move || {
        kpi_count(collection.data.get().map(|report| report.summary.lead_count))
    });
    let total_invoiced = Signal::derive(move || {
        kpi_money(financial.data.get().map(|report| report.summary.total_invoiced))
    });
    let total_paid = Signal::derive(move || {
        kpi_money(financial.data.get().map(|report| report.summary.total_paid))
    });
    let total_outstanding = Signal::derive(move || {
        kpi_money(
            financial
                .data
                .get()
                .map(|report| report.summary.total_outstanding),
        )
    });
    let payout_median = Signal::derive(move || {
        funnel
            .get()
            .and_then(Result::ok)
            .and_then(|report| median_hours(&funnel_hours(&report)))
            .map_or_else(|| "-".to_owned(), format_duration_hours)
    });

    let error_message = move || {
        financial
            .error
            .get()
            .or_else(|| collection.error.get())
            .unwrap_or_default()
    };

    view! {
        <div class="dashboard-page">
            <header class="page__header">
                <h1>"Přehled"</h1>
                <PeriodPicker filter=filter/>
            </header>

            <Show when=move || financial.error.get().is_some() || collection.error.get().is_some()>
                <p class="page__error">{error_message}</p>
            </Show>

            <div class="dashboard-page__kpis">
                <KpiCard label="Vymáhaná částka" value=total_due/>
                <KpiCard label="Dlužníků" value=lead_count/>
                <KpiCard label="Vyfakturováno" value=total_invoiced/>
                <KpiCard label="Zaplaceno" value=total_paid/>
                <KpiCard label="Po splatnosti" value=total_outstanding/>
                <KpiCard
                    label="Výplata po schválení"
                    value=payout_median
                    hint="medián, schválení financování až výplata".to_owned()
                />
            </div>

            <section class="dashboard-page__funnel">
                <h2>"Rychlost výplat"</h2>
                <Suspense fallback=move || view! { <p>"Načítání..."</p> }>
                    {move || {
                        funnel
                            .get()
                            .map(|result| match result {
                                Ok(report) => {
                                    let buckets = bucket_durations(&funnel_hours(&report));
                                    view! {
                                        <ul class="funnel-buckets">
                                            {buckets
                                                .into_iter()
                                                .map(|bucket| {
                                                    view! {
                                                        <li class="funnel-buckets__row">
                                                            <span class="funnel-buckets__label">{bucket.label}</span>
                                                            <span class="funnel-buckets__count">{bucket.count}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                                Err(message) => view! { <p class="page__error">{message}</p> }.into_any(),
                            })
                    }}
                </Suspense>
            </section>
        </div>
    }
}
