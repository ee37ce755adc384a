use serde::{Deserialize, Serialize};
use url::Url;

/// System preferences edited from the settings panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // Notifications
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub sms_notifications: bool,
    pub visitor_alerts: bool,
    pub maintenance_alerts: bool,
    // Security
    pub two_factor_auth: bool,
    pub session_timeout_minutes: u32,
    pub password_expiry_days: u32,
    // System
    pub timezone: String,
    pub language: String,
    pub date_format: String,
    // Integration
    pub api_base_url: Url,
    pub enable_analytics: bool,
    pub enable_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            sms_notifications: false,
            visitor_alerts: true,
            maintenance_alerts: true,
            two_factor_auth: false,
            session_timeout_minutes: 30,
            password_expiry_days: 90,
            timezone: "Asia/Kolkata".into(),
            language: "en".into(),
            date_format: "DD/MM/YYYY".into(),
            api_base_url: Url::parse("http://localhost:8080/api/v1").unwrap(),
            enable_analytics: true,
            enable_logging: true,
        }
    }
}
