use dioxus::prelude::*;
use types::{Identity, Role, monitor::UserStats};

use crate::use_notice;
use crate::views::components::StatCard;

struct Stat {
    title: &'static str,
    value: String,
    description: String,
    trend: Option<f64>,
}

/// Headline cards per role, in the shape the old portal showed them.
fn role_stats(identity: &Identity) -> Vec<Stat> {
    let society = identity.society.as_deref().unwrap_or("your society");
    let building = identity.building.as_deref().unwrap_or("your building");

    match identity.role {
        Role::SuperAdmin => vec![
            Stat {
                title: "Total Residents",
                value: "1,247".into(),
                description: "Across all properties".into(),
                trend: Some(8.2),
            },
            Stat {
                title: "Active Visitors",
                value: "23".into(),
                description: "Currently in buildings".into(),
                trend: Some(-2.1),
            },
            Stat {
                title: "Monthly Revenue",
                value: "$45,230".into(),
                description: "Maintenance & fees".into(),
                trend: Some(12.5),
            },
            Stat {
                title: "Support Tickets",
                value: "12".into(),
                description: "3 open issues".into(),
                trend: Some(-15.3),
            },
        ],
        Role::Admin => vec![
            Stat {
                title: "Building Residents",
                value: "342".into(),
                description: format!("{building} residents"),
                trend: Some(5.1),
            },
            Stat {
                title: "Today's Visitors",
                value: "18".into(),
                description: "Checked in today".into(),
                trend: Some(3.2),
            },
            Stat {
                title: "Pending Payments",
                value: "$8,420".into(),
                description: "Outstanding dues".into(),
                trend: Some(-8.7),
            },
            Stat {
                title: "Announcements",
                value: "5".into(),
                description: "Active notices".into(),
                trend: Some(0.0),
            },
        ],
        Role::Secretary => vec![
            Stat {
                title: "Society Members",
                value: "156".into(),
                description: society.to_string(),
                trend: Some(2.3),
            },
            Stat {
                title: "Visitor Requests",
                value: "7".into(),
                description: "Pending approval".into(),
                trend: Some(12.1),
            },
            Stat {
                title: "Maintenance Dues",
                value: "$3,240".into(),
                description: "This month collected".into(),
                trend: Some(18.2),
            },
            Stat {
                title: "Events",
                value: "3".into(),
                description: "Upcoming this month".into(),
                trend: Some(50.0),
            },
        ],
        Role::Security => vec![
            Stat {
                title: "Visitor Queue",
                value: "4".into(),
                description: "Waiting for entry".into(),
                trend: Some(-12.5),
            },
            Stat {
                title: "Today's Entries",
                value: "45".into(),
                description: "Total check-ins".into(),
                trend: Some(8.3),
            },
            Stat {
                title: "Active Alerts",
                value: "1".into(),
                description: "Security notifications".into(),
                trend: Some(-66.7),
            },
            Stat {
                title: "Patrol Status",
                value: "Normal".into(),
                description: "All posts covered".into(),
                trend: None,
            },
        ],
        Role::Developer => vec![
            Stat {
                title: "System Uptime",
                value: "99.8%".into(),
                description: "Last 30 days".into(),
                trend: None,
            },
            Stat {
                title: "Open Errors",
                value: "3".into(),
                description: "See System Monitoring".into(),
                trend: None,
            },
        ],
        Role::Resident | Role::Guest => Vec::new(),
    }
}

#[component]
pub fn Dashboard(welcome: Option<String>) -> Element {
    let current: Signal<Option<Identity>> = use_context();
    let mut notice = use_notice();
    let mut stats = use_signal(|| None::<UserStats>);

    // The login redirect sets the welcome flag; greet once the identity
    // has loaded.
    use_effect(move || {
        if welcome.is_some()
            && let Some(identity) = current()
        {
            notice.success(format!("Welcome back, {}!", identity.name));
        }
    });

    use_effect(move || {
        spawn(async move {
            if let Ok(fetched) = api::get_user_stats().await {
                stats.set(Some(fetched));
            }
        });
    });

    let Some(identity) = current() else {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    };

    let cards = role_stats(&identity);
    let meta = identity.role.metadata();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Dashboard" }
                    p { class: "page-subtitle", "{meta.description}" }
                }
            }

            if cards.is_empty() {
                div { class: "card",
                    p { class: "text-muted",
                        "Your account has no dashboard widgets. Use the sidebar to reach your services."
                    }
                }
            } else {
                div { class: "stat-grid",
                    for card in cards {
                        StatCard {
                            title: "{card.title}",
                            value: card.value,
                            description: card.description,
                            trend: card.trend,
                        }
                    }
                }
            }

            if let Some(stats) = stats() {
                h2 { class: "section-header", "Community Overview" }
                div { class: "stat-grid",
                    StatCard {
                        title: "Registered Residents",
                        value: "{stats.total_residents}",
                        description: "Directory records",
                        trend: None,
                    }
                    StatCard {
                        title: "Active Visitors",
                        value: "{stats.active_visitors}",
                        description: "Currently checked in",
                        trend: None,
                    }
                    StatCard {
                        title: "Pending Maintenance",
                        value: "{stats.pending_maintenance}",
                        description: "Open requests",
                        trend: None,
                    }
                    StatCard {
                        title: "Security Personnel",
                        value: "{stats.active_security_personnel}",
                        description: "On duty",
                        trend: None,
                    }
                }
            }
        }
    }
}
