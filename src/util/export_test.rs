use super::*;

#[test]
fn plain_fields_are_unquoted() {
    assert_eq!(csv_field("Praha"), "Praha");
}

#[test]
fn separator_forces_quoting() {
    assert_eq!(csv_field("a;b"), "\"a;b\"");
}

#[test]
fn quotes_are_doubled_inside_quoted_fields() {
    assert_eq!(csv_field("říkal \"ano\""), "\"říkal \"\"ano\"\"\"");
}

#[test]
fn line_breaks_force_quoting() {
    assert_eq!(csv_field("a\nb"), "\"a\nb\"");
}

#[test]
fn build_csv_starts_with_utf8_bom() {
    let csv = build_csv(&["A"], &[]);
    assert!(csv.starts_with('\u{feff}'));
}

#[test]
fn build_csv_joins_with_semicolons_and_crlf() {
    let csv = build_csv(
        &["Jméno", "Město"],
        &[vec!["Novák".to_owned(), "Plzeň".to_owned()]],
    );
    assert_eq!(csv, "\u{feff}Jméno;Město\r\nNovák;Plzeň\r\n");
}
