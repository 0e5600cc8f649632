//! Persists the password gate's session flag in local storage.

use gloo::storage::{LocalStorage, Storage};
use shared::SessionFlag;

const SESSION_KEY: &str = "classroom_dashboard_session";

pub fn load() -> Option<SessionFlag> {
    LocalStorage::get(SESSION_KEY).ok()
}

pub fn store(flag: &SessionFlag) {
    if let Err(e) = LocalStorage::set(SESSION_KEY, flag) {
        log::warn!("⚠️ Could not store session flag: {}", e);
    }
}

pub fn clear() {
    LocalStorage::delete(SESSION_KEY);
}
