//! Password gate and page routing rules.
//!
//! A correct password issues a [`SessionFlag`] that expires after the
//! configured number of hours. The flag is signed with the shared secret so a
//! hand-edited expiry is rejected, but this only keeps casual visitors out.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::DashboardConfig;
use crate::error::ValidationError;

/// Stored client side once the password was accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionFlag {
    /// Unix timestamp in seconds
    pub expires_at: i64,
    pub signature: String,
}

impl SessionFlag {
    pub fn issue(secret: &str, now: DateTime<Utc>, hours: i64) -> Self {
        let expires_at = (now + Duration::hours(hours)).timestamp();
        Self {
            expires_at,
            signature: sign(secret, expires_at),
        }
    }

    pub fn is_valid(&self, secret: &str, now: DateTime<Utc>) -> bool {
        now.timestamp() < self.expires_at && self.signature == sign(secret, self.expires_at)
    }
}

fn sign(secret: &str, expires_at: i64) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(b":");
    hasher.update(expires_at.to_string().as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check the typed password and issue a flag when it matches
pub fn login(config: &DashboardConfig, password: &str, now: DateTime<Utc>) -> Result<SessionFlag, ValidationError> {
    if password != config.admin_password {
        log::warn!("🔒 Rejected password attempt");
        return Err(ValidationError::InvalidPassword);
    }
    log::info!("🔓 Password accepted, session valid for {}h", config.session_hours);
    Ok(SessionFlag::issue(&config.admin_password, now, config.session_hours))
}

/// Every page of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    AddStudent,
    Timetable,
    Students,
    DeleteStudent,
    Blacklist,
    Attendance,
    Password,
}

impl Route {
    /// Entries of the navigation bar, in display order
    pub const NAV_ITEMS: [Route; 7] = [
        Route::Home,
        Route::AddStudent,
        Route::Timetable,
        Route::Students,
        Route::DeleteStudent,
        Route::Blacklist,
        Route::Attendance,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::AddStudent => "/add-student",
            Route::Timetable => "/timetable",
            Route::Students => "/students",
            Route::DeleteStudent => "/delete-student",
            Route::Blacklist => "/blacklist",
            Route::Attendance => "/attendance",
            Route::Password => "/password",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::AddStudent => "Add Students",
            Route::Timetable => "Set Timetable",
            Route::Students => "List of Students",
            Route::DeleteStudent => "Delete Students",
            Route::Blacklist => "Blacklist",
            Route::Attendance => "Attendance Calendar",
            Route::Password => "Password",
        }
    }

    /// Unknown paths land on Home
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        [Route::Password]
            .into_iter()
            .chain(Route::NAV_ITEMS)
            .find(|route| route.path().trim_end_matches('/') == trimmed)
            .unwrap_or(Route::Home)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(Route),
}

/// Decide whether `route` may be shown
pub fn guard(route: Route, flag: Option<&SessionFlag>, secret: &str, now: DateTime<Utc>) -> GuardDecision {
    let authenticated = flag.is_some_and(|f| f.is_valid(secret, now));
    match (route, authenticated) {
        (Route::Password, true) => GuardDecision::Redirect(Route::Home),
        (Route::Password, false) => GuardDecision::Allow,
        (_, true) => GuardDecision::Allow,
        (_, false) => GuardDecision::Redirect(Route::Password),
    }
}
