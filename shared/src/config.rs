//! Dashboard configuration.

use serde::{Deserialize, Serialize};

use crate::calendar::WeekStart;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
pub const DEFAULT_SESSION_HOURS: i64 = 24;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub week_start: WeekStart,
    /// Shared secret for the password page. Not a security boundary.
    pub admin_password: String,
    pub session_hours: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            week_start: WeekStart::default(),
            admin_password: DEFAULT_ADMIN_PASSWORD.to_string(),
            session_hours: DEFAULT_SESSION_HOURS,
        }
    }
}

impl DashboardConfig {
    /// Apply overrides on top of the defaults. Blank values are ignored.
    pub fn with_overrides(api_base_url: Option<&str>, admin_password: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_base_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(password) = admin_password.filter(|p| !p.is_empty()) {
            config.admin_password = password.to_string();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.week_start, WeekStart::Sunday);
        assert_eq!(config.admin_password, "admin123");
        assert_eq!(config.session_hours, 24);
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::with_overrides(Some("https://api.example.org/"), Some(""));
        assert_eq!(config.api_base_url, "https://api.example.org");
        assert_eq!(config.admin_password, "admin123");

        let config = DashboardConfig::with_overrides(None, Some("s3cret"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.admin_password, "s3cret");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{ "week_start": "monday", "session_hours": 8 }"#).unwrap();
        assert_eq!(config.week_start, WeekStart::Monday);
        assert_eq!(config.session_hours, 8);
        assert_eq!(config.admin_password, DEFAULT_ADMIN_PASSWORD);
    }
}
