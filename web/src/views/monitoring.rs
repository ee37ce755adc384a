use dioxus::prelude::*;
use types::monitor::{LogLevel, MonitorSnapshot, ServiceHealth};

use crate::use_notice;
use crate::views::components::{StatCard, format_time};

const LOG_LIMIT: usize = 10;

#[component]
fn HealthBadge(health: ServiceHealth) -> Element {
    let class = match health {
        ServiceHealth::Healthy => "badge badge-success",
        ServiceHealth::Degraded => "badge badge-warning",
        ServiceHealth::Down => "badge badge-destructive",
    };
    rsx! {
        span { class, "{health.label()}" }
    }
}

#[component]
pub fn Monitoring() -> Element {
    let mut notice = use_notice();
    let mut snapshot = use_signal(MonitorSnapshot::default);
    let mut loading = use_signal(|| true);
    let mut refreshing = use_signal(|| false);

    // The background refresher keeps the snapshot warm; reading it is cheap.
    use_effect(move || {
        spawn(async move {
            loading.set(true);
            match api::get_monitor_snapshot().await {
                Ok(fetched) => snapshot.set(fetched),
                Err(e) => notice.error(e.to_string()),
            }
            loading.set(false);
        });
    });

    // Manual refresh issues a live fetch through the store instead of
    // waiting for the next timer tick.
    let refresh = move |_| {
        spawn(async move {
            refreshing.set(true);
            let status = api::get_system_status().await;
            let logs = api::get_error_logs(LOG_LIMIT).await;
            match (status, logs) {
                (Ok(status), Ok(error_logs)) => {
                    snapshot.set(MonitorSnapshot {
                        status: Some(status),
                        error_logs,
                        refreshed_at: Some(jiff::Timestamp::now()),
                    });
                }
                // Keep the last-known snapshot on failure.
                (Err(e), _) | (_, Err(e)) => notice.error(e.to_string()),
            }
            refreshing.set(false);
        });
    };

    let snap = snapshot.read().clone();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "System Monitoring" }
                    p { class: "page-subtitle", "System health and performance metrics." }
                }
                div { class: "page-header-actions",
                    if let Some(refreshed_at) = snap.refreshed_at {
                        span { class: "text-muted", "Updated {format_time(refreshed_at)}" }
                    }
                    button {
                        class: "btn btn-secondary",
                        disabled: *refreshing.read(),
                        onclick: refresh,
                        if *refreshing.read() { "Refreshing..." } else { "Refresh" }
                    }
                }
            }

            if *loading.read() {
                div { class: "loading", "Loading monitoring data..." }
            } else if let Some(status) = snap.status.as_ref() {
                div { class: "stat-grid",
                    StatCard {
                        title: "System Uptime",
                        value: "{status.uptime}%",
                        description: "Rolling availability",
                        trend: None,
                    }
                    StatCard {
                        title: "Active Users",
                        value: "{status.active_users}",
                        description: "Signed in right now",
                        trend: None,
                    }
                    StatCard {
                        title: "Active Sessions",
                        value: "{status.active_sessions}",
                        description: "Open sessions",
                        trend: None,
                    }
                    StatCard {
                        title: "Error Count",
                        value: "{status.error_count}",
                        description: "Last 24 hours",
                        trend: None,
                    }
                }

                div { class: "card-grid-2",
                    div { class: "card",
                        div { class: "card-header",
                            h2 { class: "card-title", "Database" }
                            HealthBadge { health: status.db_status }
                        }
                        p { class: "text-muted", "Primary datastore connection health." }
                    }
                    div { class: "card",
                        div { class: "card-header",
                            h2 { class: "card-title", "API Gateway" }
                            HealthBadge { health: status.api_status }
                        }
                        p { class: "text-muted", "Backend API responsiveness." }
                        if let Some(last_error) = status.last_error.as_ref() {
                            p { class: "cell-secondary", "Last error: {last_error}" }
                        }
                    }
                }

                div { class: "card",
                    div { class: "card-header",
                        h2 { class: "card-title", "Recent Error Logs" }
                    }
                    if snap.error_logs.is_empty() {
                        div { class: "empty-state",
                            p { "No recent errors. System running smoothly!" }
                        }
                    } else {
                        ul { class: "log-list",
                            for log in snap.error_logs.iter() {
                                {
                                    let level_class = match log.level {
                                        LogLevel::Error => "log-level log-level-error",
                                        LogLevel::Warning => "log-level log-level-warning",
                                        LogLevel::Info => "log-level log-level-info",
                                    };
                                    rsx! {
                                        li { class: "log-row",
                                            span { class: level_class }
                                            div { class: "log-body",
                                                div { class: "cell-primary", "{log.message}" }
                                                div { class: "cell-secondary",
                                                    "{log.service} · {format_time(log.timestamp)}"
                                                }
                                            }
                                            if log.resolved {
                                                span { class: "badge badge-success", "Resolved" }
                                            } else {
                                                span { class: "badge badge-destructive", "Active" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            } else {
                div { class: "card empty-state",
                    p { "No monitoring data yet. The first refresh lands shortly." }
                }
            }
        }
    }
}
