use super::*;

// =============================================================
// Offset normalization
// =============================================================

#[test]
fn offset_less_string_parses_as_utc() {
    let bare = parse_timestamp(&TimestampValue::from("2024-01-01T10:00:00"));
    let explicit = parse_timestamp(&TimestampValue::from("2024-01-01T10:00:00Z"));
    assert!(bare.is_some());
    assert_eq!(bare, explicit);
}

#[test]
fn explicit_offset_is_left_untouched() {
    assert_eq!(
        normalize_timestamp("2024-01-01T10:00:00+02:00"),
        "2024-01-01T10:00:00+02:00"
    );
    assert_eq!(normalize_timestamp("2024-01-01T10:00:00Z"), "2024-01-01T10:00:00Z");
}

#[test]
fn offset_less_string_gets_utc_suffix() {
    assert_eq!(normalize_timestamp("2024-01-01T10:00:00"), "2024-01-01T10:00:00Z");
}

#[test]
fn positive_offset_shifts_the_instant() {
    let offset = parse_timestamp(&TimestampValue::from("2024-01-01T10:00:00+02:00"));
    let utc = parse_timestamp(&TimestampValue::from("2024-01-01T08:00:00Z"));
    assert_eq!(offset, utc);
}

#[test]
fn instant_passes_through_unchanged() {
    let instant = Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 0).unwrap();
    assert_eq!(parse_timestamp(&TimestampValue::from(instant)), Some(instant));
}

// =============================================================
// Prague rendering
// =============================================================

#[test]
fn winter_timestamp_renders_at_plus_one() {
    assert_eq!(
        format_date_time(Some("2024-01-01T10:00:00"), false),
        "01.01.2024 11:00"
    );
}

#[test]
fn summer_timestamp_renders_at_plus_two() {
    assert_eq!(
        format_date_time(Some("2024-07-01T10:00:00Z"), false),
        "01.07.2024 12:00"
    );
}

#[test]
fn seconds_flag_appends_seconds() {
    assert_eq!(
        format_date_time(Some("2024-01-01T10:00:05Z"), true),
        "01.01.2024 11:00:05"
    );
}

#[test]
fn plain_date_renders_as_utc_midnight() {
    assert_eq!(format_date(Some("2024-05-01")), "01.05.2024");
}

// =============================================================
// Failure sentinels
// =============================================================

#[test]
fn missing_value_renders_placeholder() {
    assert_eq!(format_date_time(None, false), "-");
    assert_eq!(format_date(None), "-");
}

#[test]
fn try_variant_renders_empty_for_missing_value() {
    assert_eq!(try_format_date_time(None, false), "");
}

#[test]
fn malformed_string_renders_placeholder_not_panic() {
    assert_eq!(format_date_time(Some("not-a-date"), false), "-");
    assert_eq!(try_format_date_time(Some("not-a-date"), false), "");
}

#[test]
fn empty_string_is_treated_as_missing() {
    assert_eq!(format_date_time(Some(""), false), "-");
    assert_eq!(format_date_time(Some("   "), false), "-");
}
