use super::*;

#[test]
fn reach_rate_is_a_whole_percent() {
    assert_eq!(reach_rate(200, 150), "75 %");
}

#[test]
fn reach_rate_rounds_to_whole_percents() {
    assert_eq!(reach_rate(3, 1), "33 %");
    assert_eq!(reach_rate(3, 2), "67 %");
}

#[test]
fn reach_rate_without_calls_is_undefined() {
    assert_eq!(reach_rate(0, 0), "-");
}
