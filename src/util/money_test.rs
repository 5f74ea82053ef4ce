use super::*;

#[test]
fn zero_formats_with_comma_decimals() {
    assert_eq!(format_czk(0.0), "0,00 Kč");
}

#[test]
fn thousands_are_space_grouped() {
    assert_eq!(format_czk(1_234_567.5), "1 234 567,50 Kč");
    assert_eq!(format_czk(1_000.0), "1 000,00 Kč");
}

#[test]
fn small_amounts_have_no_grouping() {
    assert_eq!(format_czk(999.99), "999,99 Kč");
}

#[test]
fn rounding_carries_into_the_whole_part() {
    assert_eq!(format_czk(999.999), "1 000,00 Kč");
}

#[test]
fn negative_amounts_keep_the_sign() {
    assert_eq!(format_czk(-1_500.0), "-1 500,00 Kč");
}

#[test]
fn negative_zero_is_rendered_unsigned() {
    assert_eq!(format_czk(-0.001), "0,00 Kč");
}
