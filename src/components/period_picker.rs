//! Report period selector with custom date bounds.

#[cfg(test)]
#[path = "period_picker_test.rs"]
mod period_picker_test;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::state::reports::{ReportFilter, ReportPeriod};

/// Parse the value of an `<input type="date">`; blank or malformed input
/// clears the bound.
fn parse_date_input(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// Period segment buttons plus date-range inputs for the custom period,
/// writing into the page's shared filter signal.
#[component]
pub fn PeriodPicker(filter: RwSignal<ReportFilter>) -> impl IntoView {
    view! {
        <div class="period-picker">
            <div class="period-picker__segments">
                {ReportPeriod::ALL
                    .into_iter()
                    .map(|period| {
                        let class = move || {
                            if filter.get().period == period {
                                "period-picker__segment period-picker__segment--active"
                            } else {
                                "period-picker__segment"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| filter.update(|f| f.period = period)>
                                {period.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show when=move || filter.get().period == ReportPeriod::Custom>
                <div class="period-picker__range">
                    <label class="period-picker__bound">
                        "Od"
                        <input
                            type="date"
                            on:input=move |ev| {
                                filter.update(|f| f.date_from = parse_date_input(&event_target_value(&ev)));
                            }
                        />
                    </label>
                    <label class="period-picker__bound">
                        "Do"
                        <input
                            type="date"
                            on:input=move |ev| {
                                filter.update(|f| f.date_to = parse_date_input(&event_target_value(&ev)));
                            }
                        />
                    </label>
                </div>
            </Show>
        </div>
    }
}
