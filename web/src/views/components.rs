use dioxus::prelude::*;
use types::{AccountStatus, Role, visitor::VisitorStatus};

/// A dashboard stat card: headline number plus an optional month-over-month
/// trend.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    description: String,
    trend: Option<f64>,
) -> Element {
    rsx! {
        div { class: "stat-card",
            div { class: "stat-card-title", "{title}" }
            div { class: "stat-card-value", "{value}" }
            div { class: "stat-card-desc", "{description}" }
            if let Some(trend) = trend {
                {
                    let class = if trend >= 0.0 { "stat-trend stat-trend-up" } else { "stat-trend stat-trend-down" };
                    let sign = if trend >= 0.0 { "+" } else { "" };
                    rsx! {
                        div { class,
                            "{sign}{trend}% "
                            span { class: "stat-trend-label", "from last month" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn RoleBadge(role: Role) -> Element {
    let meta = role.metadata();
    rsx! {
        span { class: "badge badge-{meta.color}", "{meta.label}" }
    }
}

#[component]
pub fn StatusBadge(status: AccountStatus) -> Element {
    let class = match status {
        AccountStatus::Active => "badge badge-success",
        AccountStatus::Inactive => "badge badge-muted",
    };
    rsx! {
        span { class, "{status.as_str()}" }
    }
}

#[component]
pub fn VisitorStatusBadge(status: VisitorStatus) -> Element {
    let class = match status {
        VisitorStatus::Pending => "badge badge-warning",
        VisitorStatus::Approved => "badge badge-primary",
        VisitorStatus::CheckedIn => "badge badge-success",
        VisitorStatus::CheckedOut => "badge badge-muted",
        VisitorStatus::Rejected => "badge badge-destructive",
    };
    rsx! {
        span { class, "{status.label()}" }
    }
}

/// Short local-style timestamp for table cells.
pub fn format_time(timestamp: jiff::Timestamp) -> String {
    timestamp.strftime("%b %d, %I:%M %p").to_string()
}
