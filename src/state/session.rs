//! Session lifecycle: hydration from localStorage, persistence, teardown.
//!
//! DESIGN
//! ======
//! Session logic talks to storage through the `SessionStorage` seam instead
//! of ambient browser globals, so hydration and teardown test against an
//! in-memory map. `BrowserStorage` is the production implementation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{LoginResponse, PortalUser};
use crate::util::storage;

pub const TOKEN_KEY: &str = "token";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const USER_KEY: &str = "user";

const SESSION_KEYS: [&str; 3] = [TOKEN_KEY, REFRESH_TOKEN_KEY, USER_KEY];

/// Session status: `Loading` until storage has been consulted, then either
/// `Authenticated` or `Anonymous`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Loading,
    Authenticated,
    Anonymous,
}

/// The current session, provided as a context signal to all pages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub status: SessionStatus,
    pub user: Option<PortalUser>,
}

impl SessionState {
    pub fn authenticated(user: PortalUser) -> Self {
        Self {
            status: SessionStatus::Authenticated,
            user: Some(user),
        }
    }

    pub fn anonymous() -> Self {
        Self {
            status: SessionStatus::Anonymous,
            user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }
}

/// Key/value storage seam for session persistence.
pub trait SessionStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// localStorage-backed session storage; no-op off-browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl SessionStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        storage::load_string(key)
    }

    fn write(&self, key: &str, value: &str) {
        storage::save_string(key, value);
    }

    fn remove(&self, key: &str) {
        storage::remove(key);
    }
}

fn clear_keys(storage: &dyn SessionStorage) {
    for key in SESSION_KEYS {
        storage.remove(key);
    }
}

/// Rebuild the session from stored keys. A token with a parseable stored
/// user yields `Authenticated`; a token with a missing or corrupted user
/// record clears every session key and falls back to `Anonymous`; no token
/// yields `Anonymous`.
pub fn hydrate_session(storage: &dyn SessionStorage) -> SessionState {
    if storage.read(TOKEN_KEY).is_none() {
        return SessionState::anonymous();
    }
    let Some(raw_user) = storage.read(USER_KEY) else {
        clear_keys(storage);
        return SessionState::anonymous();
    };
    match serde_json::from_str::<PortalUser>(&raw_user) {
        Ok(user) => SessionState::authenticated(user),
        Err(_) => {
            clear_keys(storage);
            SessionState::anonymous()
        }
    }
}

/// Persist a successful login: both tokens plus the serialized user.
pub fn persist_session(storage: &dyn SessionStorage, login: &LoginResponse) {
    storage.write(TOKEN_KEY, &login.tokens.access_token);
    storage.write(REFRESH_TOKEN_KEY, &login.tokens.refresh_token);
    if let Ok(raw) = serde_json::to_string(&login.user) {
        storage.write(USER_KEY, &raw);
    }
}

/// Drop every session key and return the anonymous state. Callers invoke
/// the backend logout first and swallow its error; this local teardown is
/// unconditional.
pub fn teardown_session(storage: &dyn SessionStorage) -> SessionState {
    clear_keys(storage);
    SessionState::anonymous()
}
