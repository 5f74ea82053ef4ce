use super::*;

fn date(raw: &str) -> NaiveDate {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").unwrap()
}

// =============================================================
// Fetch plan derivation
// =============================================================

#[test]
fn preset_periods_are_always_ready() {
    let filter = ReportFilter::default();
    assert_eq!(filter.fetch_plan(), FetchPlan::Ready("period=month".to_owned()));
}

#[test]
fn every_preset_maps_to_its_query_value() {
    for (period, expected) in [
        (ReportPeriod::Day, "period=day"),
        (ReportPeriod::Week, "period=week"),
        (ReportPeriod::Month, "period=month"),
        (ReportPeriod::Year, "period=year"),
    ] {
        let filter = ReportFilter {
            period,
            ..ReportFilter::default()
        };
        assert_eq!(filter.fetch_plan(), FetchPlan::Ready(expected.to_owned()));
    }
}

#[test]
fn custom_period_with_only_from_waits() {
    let filter = ReportFilter {
        period: ReportPeriod::Custom,
        date_from: Some(date("2024-01-01")),
        date_to: None,
    };
    assert_eq!(filter.fetch_plan(), FetchPlan::WaitingForRange);
}

#[test]
fn custom_period_with_only_to_waits() {
    let filter = ReportFilter {
        period: ReportPeriod::Custom,
        date_from: None,
        date_to: Some(date("2024-01-31")),
    };
    assert_eq!(filter.fetch_plan(), FetchPlan::WaitingForRange);
}

#[test]
fn custom_period_with_both_bounds_builds_the_query() {
    let filter = ReportFilter {
        period: ReportPeriod::Custom,
        date_from: Some(date("2024-01-01")),
        date_to: Some(date("2024-01-31")),
    };
    assert_eq!(
        filter.fetch_plan(),
        FetchPlan::Ready("period=custom&dateFrom=2024-01-01&dateTo=2024-01-31".to_owned())
    );
}

// =============================================================
// Stale-response guard
// =============================================================

#[test]
fn response_from_the_current_generation_is_kept() {
    assert!(!superseded(3, 3));
}

#[test]
fn response_from_an_older_generation_is_dropped() {
    assert!(superseded(4, 3));
}
