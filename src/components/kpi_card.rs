//! Dashboard KPI stat card.

use leptos::prelude::*;

/// A labeled aggregate value with an optional hint line.
#[component]
pub fn KpiCard(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into, optional)] hint: Option<String>,
) -> impl IntoView {
    view! {
        <div class="kpi-card">
            <span class="kpi-card__label">{label}</span>
            <span class="kpi-card__value">{move || value.get()}</span>
            {hint.map(|hint| view! { <span class="kpi-card__hint">{hint}</span> })}
        </div>
    }
}
