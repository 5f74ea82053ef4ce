use super::*;

fn cities() -> Vec<SelectOption> {
    ["Praha", "Plzeň", "Brno"]
        .into_iter()
        .map(|city| SelectOption::new(city, city))
        .collect()
}

#[test]
fn filter_is_case_insensitive_substring_match() {
    let filtered = filter_options(&cities(), "pl");
    let labels: Vec<&str> = filtered.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, vec!["Plzeň"]);
}

#[test]
fn blank_term_keeps_every_option() {
    assert_eq!(filter_options(&cities(), "").len(), 3);
    assert_eq!(filter_options(&cities(), "   ").len(), 3);
}

#[test]
fn uppercase_term_still_matches() {
    let filtered = filter_options(&cities(), "PRA");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].label, "Praha");
}

#[test]
fn unmatched_term_yields_no_options() {
    assert!(filter_options(&cities(), "Ostrava").is_empty());
}

#[test]
fn enter_selects_only_with_exactly_one_match() {
    let filtered = filter_options(&cities(), "pl");
    assert_eq!(single_match(&filtered).map(|o| o.label.as_str()), Some("Plzeň"));

    let all = filter_options(&cities(), "");
    assert!(single_match(&all).is_none());
    assert!(single_match(&[]).is_none());
}
