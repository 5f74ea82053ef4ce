//! Report period filtering and the shared report-fetch hook.
//!
//! DESIGN
//! ======
//! Query derivation is pure (`ReportFilter::fetch_plan`) so the
//! fetch-or-wait decision tests natively. The reactive half (`use_report`)
//! re-fetches whenever the derived plan changes and tags every request with
//! a generation counter; responses from superseded generations are dropped
//! so a slow early response can never overwrite a newer one.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use chrono::NaiveDate;
use leptos::prelude::*;

/// Period presets for the report pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportPeriod {
    Day,
    Week,
    #[default]
    Month,
    Year,
    Custom,
}

impl ReportPeriod {
    pub const ALL: [Self; 5] = [Self::Day, Self::Week, Self::Month, Self::Year, Self::Custom];

    pub fn as_query_value(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Custom => "custom",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Den",
            Self::Week => "Týden",
            Self::Month => "Měsíc",
            Self::Year => "Rok",
            Self::Custom => "Vlastní",
        }
    }
}

/// Period filter owned by each report page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub period: ReportPeriod,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

/// Whether a fetch should be issued for the current filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchPlan {
    /// Fetch with this query string.
    Ready(String),
    /// Custom period with an incomplete range; no request until both
    /// bounds are present.
    WaitingForRange,
}

impl ReportFilter {
    pub fn fetch_plan(&self) -> FetchPlan {
        if self.period != ReportPeriod::Custom {
            return FetchPlan::Ready(format!("period={}", self.period.as_query_value()));
        }
        match (self.date_from, self.date_to) {
            (Some(from), Some(to)) => FetchPlan::Ready(format!(
                "period=custom&dateFrom={}&dateTo={}",
                from.format("%Y-%m-%d"),
                to.format("%Y-%m-%d")
            )),
            _ => FetchPlan::WaitingForRange,
        }
    }
}

/// A response is stale when a newer fetch has started since it was issued.
fn superseded(current: u64, started: u64) -> bool {
    current != started
}

/// Reactive report state handed to a page by [`use_report`].
pub struct ReportHandle<T: Clone + Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub waiting_for_range: Memo<bool>,
    refetch_seq: RwSignal<u64>,
}

// Handles are plain bundles of arena-keyed signals; they copy even when
// the payload type does not.
impl<T: Clone + Send + Sync + 'static> Clone for ReportHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Clone + Send + Sync + 'static> Copy for ReportHandle<T> {}

impl<T: Clone + Send + Sync + 'static> ReportHandle<T> {
    /// Manual refresh; re-runs the fetch for the current filter.
    pub fn refetch(&self) {
        self.refetch_seq.update(|seq| *seq += 1);
    }
}

/// Fetch a report whenever the filter's derived query or the manual
/// refetch counter changes. The stored payload is replaced wholesale on
/// success; failures store a display string. There is no retry policy.
pub fn use_report<T, Fetch, Fut>(filter: Signal<ReportFilter>, fetch: Fetch) -> ReportHandle<T>
where
    T: Clone + Send + Sync + 'static,
    Fetch: Fn(String) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = RwSignal::new(None::<T>);
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let refetch_seq = RwSignal::new(0_u64);
    let generation = RwSignal::new(0_u64);

    let waiting_for_range =
        Memo::new(move |_| matches!(filter.get().fetch_plan(), FetchPlan::WaitingForRange));

    Effect::new(move || {
        let _ = refetch_seq.get();
        let FetchPlan::Ready(query) = filter.get().fetch_plan() else {
            loading.set(false);
            return;
        };
        let started = generation.get_untracked() + 1;
        generation.set(started);
        loading.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = fetch(query).await;
            if superseded(generation.get_untracked(), started) {
                return;
            }
            match result {
                Ok(payload) => data.set(Some(payload)),
                Err(message) => error.set(Some(message)),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, &fetch);
        }
    });

    ReportHandle {
        data,
        loading,
        error,
        waiting_for_range,
        refetch_seq,
    }
}
