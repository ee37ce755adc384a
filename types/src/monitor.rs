//! Shapes reported by the system-monitoring view. All values are static
//! mock metrics; nothing here measures a real system.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceHealth {
    Healthy,
    Degraded,
    Down,
}

impl ServiceHealth {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceHealth::Healthy => "Healthy",
            ServiceHealth::Degraded => "Degraded",
            ServiceHealth::Down => "Down",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub uptime: f64,
    pub active_users: u32,
    pub active_sessions: u32,
    pub error_count: u32,
    pub last_error: Option<String>,
    pub db_status: ServiceHealth,
    pub api_status: ServiceHealth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorLog {
    pub id: Uuid,
    pub timestamp: Timestamp,
    pub level: LogLevel,
    pub message: String,
    pub service: String,
    pub resolved: bool,
}

/// Headline counters for the dashboard cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub total_residents: u32,
    pub active_visitors: u32,
    pub pending_maintenance: u32,
    pub active_security_personnel: u32,
}

/// The monitoring data most recently resolved by the background refresher.
///
/// Refreshes are issued on a fixed timer without waiting for the previous
/// fetch, so two slow fetches may complete out of order; the snapshot is
/// last-resolved-wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MonitorSnapshot {
    pub status: Option<SystemStatus>,
    pub error_logs: Vec<ErrorLog>,
    pub refreshed_at: Option<Timestamp>,
}
