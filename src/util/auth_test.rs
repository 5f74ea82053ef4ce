use super::*;
use crate::net::types::{PortalUser, UserRole};
use uuid::Uuid;

#[test]
fn loading_session_does_not_redirect() {
    assert!(!requires_login(&SessionState::default()));
}

#[test]
fn anonymous_session_redirects() {
    assert!(requires_login(&SessionState::anonymous()));
}

#[test]
fn authenticated_session_does_not_redirect() {
    let user = PortalUser {
        id: Uuid::new_v4(),
        name: "Jana Nováková".to_owned(),
        email: "jana@cashdrive.cz".to_owned(),
        role: UserRole::Admin,
    };
    assert!(!requires_login(&SessionState::authenticated(user)));
}
