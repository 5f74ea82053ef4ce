//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components should apply identical unauthenticated redirect
//! behavior once the session has resolved.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionState, SessionStatus};

/// Whether a resolved session requires a redirect to the login page.
/// A still-loading session never redirects.
pub fn requires_login(state: &SessionState) -> bool {
    state.status == SessionStatus::Anonymous
}

/// Redirect to `/login` whenever the session resolves without a user.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if requires_login(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
