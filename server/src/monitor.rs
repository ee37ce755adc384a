//! Background refresher for the system-monitoring snapshot.
//!
//! A fetch is issued on a fixed timer regardless of whether the previous one
//! has resolved, so two slow fetches can complete out of order; the snapshot
//! is last-resolved-wins, not last-issued-wins.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use jiff::Timestamp;
use tokio::sync::RwLock;
use types::Result;
use types::monitor::{ErrorLog, MonitorSnapshot, SystemStatus};

use crate::CONFIG;
use crate::storage::{STORE, Storage};

/// How many error-log rows the refresher keeps in the snapshot.
const LOG_WINDOW: usize = 10;

#[derive(Default)]
pub struct Monitor {
    snapshot: RwLock<MonitorSnapshot>,
}

static MONITOR: LazyLock<Arc<Monitor>> = LazyLock::new(Arc::default);

impl Monitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> MonitorSnapshot {
        self.snapshot.read().await.clone()
    }

    /// Issue a fetch every `every`, without waiting for the previous one.
    pub async fn run(self: Arc<Self>, store: Arc<dyn Storage>, every: Duration) {
        let mut ticks = tokio::time::interval(every);
        loop {
            ticks.tick().await;
            let monitor = Arc::clone(&self);
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                let fetched = fetch(&*store).await;
                monitor.absorb(fetched).await;
            });
        }
    }

    /// Fold one resolved fetch into the snapshot.
    pub async fn absorb(&self, fetched: Result<(SystemStatus, Vec<ErrorLog>)>) {
        match fetched {
            Ok((status, error_logs)) => {
                let mut snapshot = self.snapshot.write().await;
                *snapshot = MonitorSnapshot {
                    status: Some(status),
                    error_logs,
                    refreshed_at: Some(Timestamp::now()),
                };
            }
            Err(error) => {
                // Keep the last-known snapshot; the failure is only surfaced.
                tracing::warn!(%error, "monitoring refresh failed");
            }
        }
    }
}

async fn fetch(store: &dyn Storage) -> Result<(SystemStatus, Vec<ErrorLog>)> {
    let status = store.system_status().await?;
    let error_logs = store.error_logs(LOG_WINDOW).await?;
    Ok((status, error_logs))
}

/// Start the process-wide refresh loop.
pub fn start() {
    let every = Duration::from_secs(CONFIG.monitor_refresh_secs);
    tokio::spawn(Arc::clone(&MONITOR).run(Arc::clone(&STORE), every));
}

/// The most recently resolved monitoring data.
pub async fn snapshot() -> MonitorSnapshot {
    MONITOR.snapshot().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use types::Error;
    use types::monitor::ServiceHealth;

    fn status(active_users: u32) -> SystemStatus {
        SystemStatus {
            uptime: 99.8,
            active_users,
            active_sessions: 0,
            error_count: 0,
            last_error: None,
            db_status: ServiceHealth::Healthy,
            api_status: ServiceHealth::Healthy,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn last_resolved_fetch_wins() {
        let monitor = Arc::new(Monitor::new());

        // The first-issued fetch is slow and resolves after the second.
        let slow = {
            let monitor = Arc::clone(&monitor);
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(50)).await;
                monitor.absorb(Ok((status(1), Vec::new()))).await;
            })
        };
        let fast = {
            let monitor = Arc::clone(&monitor);
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(10)).await;
                monitor.absorb(Ok((status(2), Vec::new()))).await;
            })
        };

        fast.await.unwrap();
        slow.await.unwrap();

        let snapshot = monitor.snapshot().await;
        assert_eq!(snapshot.status.unwrap().active_users, 1);
        assert!(snapshot.refreshed_at.is_some());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_last_known_snapshot() {
        let monitor = Monitor::new();
        monitor.absorb(Ok((status(7), Vec::new()))).await;
        monitor
            .absorb(Err(Error::load("mock backend rejected the fetch")))
            .await;

        assert_eq!(monitor.snapshot().await.status.unwrap().active_users, 7);
    }

    #[tokio::test]
    async fn empty_monitor_reports_nothing() {
        let monitor = Monitor::new();
        let snapshot = monitor.snapshot().await;
        assert!(snapshot.status.is_none());
        assert!(snapshot.error_logs.is_empty());
        assert!(snapshot.refreshed_at.is_none());
    }
}
