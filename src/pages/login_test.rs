use super::*;

#[test]
fn validate_login_input_trims_the_email() {
    let credentials = validate_login_input("  user@example.cz  ", "tajne").unwrap();
    assert_eq!(credentials.email, "user@example.cz");
    assert_eq!(credentials.password, "tajne");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(
        validate_login_input("   ", "tajne"),
        Err("Vyplňte e-mail a heslo.")
    );
    assert_eq!(
        validate_login_input("user@example.cz", ""),
        Err("Vyplňte e-mail a heslo.")
    );
}

#[test]
fn password_is_not_trimmed() {
    let credentials = validate_login_input("user@example.cz", " heslo ").unwrap();
    assert_eq!(credentials.password, " heslo ");
}

#[test]
fn customers_land_in_the_portal() {
    assert_eq!(home_route(UserRole::Customer), "/portal");
    assert_eq!(home_route(UserRole::Admin), "/");
    assert_eq!(home_route(UserRole::Operator), "/");
}
