//! Duration bucketing for the finance-approval to paid-out funnel.
//!
//! DESIGN
//! ======
//! The backend returns raw per-lead durations; bucketing and the median
//! KPI are derived client-side so the dashboard can re-aggregate without
//! another round trip.

#[cfg(test)]
#[path = "funnel_test.rs"]
mod funnel_test;

/// A labeled duration bucket with its interval count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunnelBucket {
    pub label: &'static str,
    pub count: usize,
}

/// Upper bounds in hours for all but the open-ended last bucket.
const BUCKET_BOUNDS: [(&str, i64); 3] = [
    ("do 24 hodin", 24),
    ("1-3 dny", 72),
    ("3-7 dní", 168),
];

const LAST_BUCKET_LABEL: &str = "přes týden";

/// Count durations into the fixed funnel buckets. Always returns every
/// bucket, including empty ones, so charts keep a stable shape.
pub fn bucket_durations(durations_hours: &[i64]) -> Vec<FunnelBucket> {
    let mut buckets: Vec<FunnelBucket> = BUCKET_BOUNDS
        .iter()
        .map(|(label, _)| FunnelBucket { label, count: 0 })
        .collect();
    buckets.push(FunnelBucket {
        label: LAST_BUCKET_LABEL,
        count: 0,
    });

    for &hours in durations_hours {
        let slot = BUCKET_BOUNDS
            .iter()
            .position(|(_, bound)| hours < *bound)
            .unwrap_or(BUCKET_BOUNDS.len());
        buckets[slot].count += 1;
    }
    buckets
}

/// Median duration in hours, `None` for an empty input.
pub fn median_hours(durations_hours: &[i64]) -> Option<i64> {
    if durations_hours.is_empty() {
        return None;
    }
    let mut sorted = durations_hours.to_vec();
    sorted.sort_unstable();
    let middle = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[middle])
    } else {
        Some((sorted[middle - 1] + sorted[middle]) / 2)
    }
}

/// Human-readable duration: hours under two days, Czech-pluralized days
/// beyond that.
pub fn format_duration_hours(hours: i64) -> String {
    if hours < 48 {
        return format!("{hours} h");
    }
    let days = hours / 24;
    let unit = match days {
        1 => "den",
        2..=4 => "dny",
        _ => "dní",
    };
    format!("{days} {unit}")
}
