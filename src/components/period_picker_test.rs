use super::*;

#[test]
fn valid_date_input_parses() {
    assert_eq!(
        parse_date_input("2024-01-31"),
        NaiveDate::from_ymd_opt(2024, 1, 31)
    );
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    assert_eq!(
        parse_date_input(" 2024-01-31 "),
        NaiveDate::from_ymd_opt(2024, 1, 31)
    );
}

#[test]
fn blank_or_malformed_input_clears_the_bound() {
    assert_eq!(parse_date_input(""), None);
    assert_eq!(parse_date_input("31.01.2024"), None);
}
