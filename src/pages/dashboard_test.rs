use super::*;
use crate::net::types::FunnelInterval;
use uuid::Uuid;

#[test]
fn kpi_money_renders_placeholder_without_data() {
    assert_eq!(kpi_money(None), "-");
}

#[test]
fn kpi_money_formats_amounts() {
    assert_eq!(kpi_money(Some(125_000.0)), "125 000,00 Kč");
}

#[test]
fn kpi_count_renders_placeholder_without_data() {
    assert_eq!(kpi_count(None), "-");
    assert_eq!(kpi_count(Some(17)), "17");
}

#[test]
fn funnel_hours_extracts_durations() {
    let report = FunnelReport {
        intervals: vec![
            FunnelInterval {
                lead_id: Uuid::new_v4(),
                finance_approved_at: "2024-01-01T10:00:00Z".to_owned(),
                paid_out_at: "2024-01-02T10:00:00Z".to_owned(),
                duration_hours: 24,
            },
            FunnelInterval {
                lead_id: Uuid::new_v4(),
                finance_approved_at: "2024-01-01T10:00:00Z".to_owned(),
                paid_out_at: "2024-01-04T10:00:00Z".to_owned(),
                duration_hours: 72,
            },
        ],
    };
    assert_eq!(funnel_hours(&report), vec![24, 72]);
}
