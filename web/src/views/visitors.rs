use dioxus::prelude::*;
use types::{
    Identity, Role,
    visitor::{NewVisitor, Visitor, VisitorQuery, VisitorStatus},
};

use crate::use_notice;
use crate::views::components::{StatCard, VisitorStatusBadge, format_time};

fn page_title(role: Role) -> &'static str {
    match role {
        Role::Security => "Visitor Security",
        _ => "Visitor Management",
    }
}

fn page_description(identity: &Identity) -> String {
    match identity.role {
        Role::Security => "Monitor and manage visitor entry/exit".into(),
        Role::Secretary => format!(
            "Approve and manage visitors for {}",
            identity.society.as_deref().unwrap_or("your society")
        ),
        _ => "Manage visitor access and tracking".into(),
    }
}

/// The one-step lifecycle action offered for a visitor, if any.
fn next_action(status: VisitorStatus) -> Option<(&'static str, VisitorStatus)> {
    match status {
        VisitorStatus::Pending => Some(("Approve", VisitorStatus::Approved)),
        VisitorStatus::Approved => Some(("Check In", VisitorStatus::CheckedIn)),
        VisitorStatus::CheckedIn => Some(("Check Out", VisitorStatus::CheckedOut)),
        VisitorStatus::CheckedOut | VisitorStatus::Rejected => None,
    }
}

#[component]
pub fn Visitors() -> Element {
    let current: Signal<Option<Identity>> = use_context();
    let mut notice = use_notice();

    let mut visitors = use_signal(Vec::<Visitor>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut status_filter = use_signal(|| None::<VisitorStatus>);
    let mut show_register = use_signal(|| false);
    let mut updating = use_signal(|| None::<uuid::Uuid>);

    use_effect(move || {
        let query = VisitorQuery {
            search: search(),
            status: status_filter(),
        };
        spawn(async move {
            loading.set(true);
            match api::get_visitors(query).await {
                Ok(list) => visitors.set(list),
                Err(e) => notice.error(e.to_string()),
            }
            loading.set(false);
        });
    });

    let refresh = move || {
        let query = VisitorQuery {
            search: search(),
            status: status_filter(),
        };
        spawn(async move {
            if let Ok(list) = api::get_visitors(query).await {
                visitors.set(list);
            }
        });
    };

    let Some(identity) = current() else {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    };
    let can_review = identity.role.can_review_visitors();
    let can_register = identity.role.can_create_visitors();

    let pending = visitors.read().iter().filter(|v| v.status == VisitorStatus::Pending).count();
    let inside = visitors.read().iter().filter(|v| v.status == VisitorStatus::CheckedIn).count();
    let total = visitors.read().len();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "{page_title(identity.role)}" }
                    p { class: "page-subtitle", "{page_description(&identity)}" }
                }
                if can_register {
                    div { class: "page-header-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_register.set(true),
                            "Register Visitor"
                        }
                    }
                }
            }

            div { class: "stat-grid",
                StatCard {
                    title: "Pending Approval",
                    value: "{pending}",
                    description: "Awaiting review",
                    trend: None,
                }
                StatCard {
                    title: "Currently Inside",
                    value: "{inside}",
                    description: "Active visitors",
                    trend: None,
                }
                StatCard {
                    title: "Total Visitors",
                    value: "{total}",
                    description: "In your view",
                    trend: None,
                }
            }

            div { class: "filter-bar",
                input {
                    class: "form-input filter-search",
                    r#type: "search",
                    placeholder: "Search by name, phone, host, or purpose...",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
                select {
                    class: "form-input filter-select",
                    onchange: move |e| {
                        let value = e.value();
                        status_filter.set(
                            VisitorStatus::ALL
                                .into_iter()
                                .find(|s| s.as_str() == value),
                        );
                    },
                    option { value: "all", "All statuses" }
                    for status in VisitorStatus::ALL {
                        option { value: "{status.as_str()}", "{status.label()}" }
                    }
                }
            }

            if *show_register.read() {
                RegisterVisitorModal {
                    society: identity.society.clone(),
                    building: identity.building.clone(),
                    on_close: move |_| show_register.set(false),
                    on_registered: move |_| {
                        show_register.set(false);
                        refresh();
                    },
                }
            }

            if *loading.read() {
                div { class: "loading", "Loading visitors..." }
            } else if visitors.read().is_empty() {
                div { class: "card empty-state",
                    p { "No visitors match your view." }
                }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Visitor" }
                                    th { "Host" }
                                    th { "Purpose" }
                                    th { "Building" }
                                    th { "Status" }
                                    th { "Timing" }
                                    if can_review {
                                        th { "" }
                                    }
                                }
                            }
                            tbody {
                                for visitor in visitors.read().iter() {
                                    {
                                        let visitor = visitor.clone();
                                        let visitor_id = visitor.id;
                                        let is_updating = updating() == Some(visitor_id);
                                        let building = visitor.building.clone().unwrap_or_else(|| "—".into());
                                        let timing = match (visitor.check_in_time, visitor.check_out_time) {
                                            (Some(check_in), Some(check_out)) => {
                                                format!("{} → {}", format_time(check_in), format_time(check_out))
                                            }
                                            (Some(check_in), None) => format!("In since {}", format_time(check_in)),
                                            _ => "—".into(),
                                        };
                                        rsx! {
                                            tr {
                                                td {
                                                    div { class: "cell-primary", "{visitor.name}" }
                                                    div { class: "cell-secondary", "{visitor.phone}" }
                                                }
                                                td {
                                                    div { class: "cell-primary", "{visitor.host_name}" }
                                                    div { class: "cell-secondary", "Flat {visitor.host_flat}" }
                                                }
                                                td { "{visitor.purpose}" }
                                                td { "{building}" }
                                                td {
                                                    VisitorStatusBadge { status: visitor.status }
                                                }
                                                td { class: "cell-secondary", "{timing}" }
                                                if can_review {
                                                    td { class: "cell-actions",
                                                        if let Some((label, next)) = next_action(visitor.status) {
                                                            button {
                                                                class: "btn btn-link",
                                                                disabled: is_updating,
                                                                onclick: move |_| {
                                                                    spawn(async move {
                                                                        updating.set(Some(visitor_id));
                                                                        match api::set_visitor_status(visitor_id, next).await {
                                                                            Ok(updated) => notice.success(format!(
                                                                                "{} is now {}",
                                                                                updated.name,
                                                                                updated.status.label()
                                                                            )),
                                                                            Err(e) => notice.error(e.to_string()),
                                                                        }
                                                                        updating.set(None);
                                                                        refresh();
                                                                    });
                                                                },
                                                                "{label}"
                                                            }
                                                        }
                                                        if visitor.status == VisitorStatus::Pending {
                                                            button {
                                                                class: "btn btn-link btn-link-danger",
                                                                disabled: is_updating,
                                                                onclick: move |_| {
                                                                    spawn(async move {
                                                                        updating.set(Some(visitor_id));
                                                                        match api::set_visitor_status(visitor_id, VisitorStatus::Rejected).await {
                                                                            Ok(updated) => notice.success(format!("{} rejected", updated.name)),
                                                                            Err(e) => notice.error(e.to_string()),
                                                                        }
                                                                        updating.set(None);
                                                                        refresh();
                                                                    });
                                                                },
                                                                "Reject"
                                                            }
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RegisterVisitorModal(
    society: Option<String>,
    building: Option<String>,
    on_close: EventHandler<()>,
    on_registered: EventHandler<()>,
) -> Element {
    let mut notice = use_notice();
    let mut name = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut purpose = use_signal(String::new);
    let mut host_name = use_signal(String::new);
    let mut host_flat = use_signal(String::new);
    let mut vehicle = use_signal(String::new);
    let mut registering = use_signal(|| false);

    let can_submit = !name.read().is_empty()
        && !phone.read().is_empty()
        && !host_name.read().is_empty();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Register Visitor" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "visitor-name", "Name *" }
                        input {
                            id: "visitor-name",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. Alex Johnson",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "visitor-phone", "Phone *" }
                        input {
                            id: "visitor-phone",
                            class: "form-input",
                            r#type: "tel",
                            placeholder: "e.g. +1-234-567-8900",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "visitor-purpose", "Purpose" }
                        input {
                            id: "visitor-purpose",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. Family Visit",
                            value: "{purpose}",
                            oninput: move |e| purpose.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "visitor-host", "Host *" }
                        input {
                            id: "visitor-host",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. John Doe",
                            value: "{host_name}",
                            oninput: move |e| host_name.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "visitor-flat", "Host Flat" }
                        input {
                            id: "visitor-flat",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. 502",
                            value: "{host_flat}",
                            oninput: move |e| host_flat.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "visitor-vehicle", "Vehicle Number" }
                        input {
                            id: "visitor-vehicle",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. MH12AB1234",
                            value: "{vehicle}",
                            oninput: move |e| vehicle.set(e.value()),
                        }
                    }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        disabled: !can_submit || *registering.read(),
                        onclick: {
                            let society = society.clone();
                            let building = building.clone();
                            move |_| {
                                let new = NewVisitor {
                                    name: name.read().clone(),
                                    phone: phone.read().clone(),
                                    email: None,
                                    purpose: purpose.read().clone(),
                                    host_name: host_name.read().clone(),
                                    host_flat: host_flat.read().clone(),
                                    society: society.clone(),
                                    building: building.clone(),
                                    vehicle_number: {
                                        let v = vehicle.read().trim().to_string();
                                        if v.is_empty() { None } else { Some(v) }
                                    },
                                };
                                spawn(async move {
                                    registering.set(true);
                                    match api::create_visitor(new).await {
                                        Ok(visitor) => {
                                            notice.success(format!("Visitor {} registered", visitor.name));
                                            on_registered.call(());
                                        }
                                        Err(e) => notice.error(e.to_string()),
                                    }
                                    registering.set(false);
                                });
                            }
                        },
                        if *registering.read() { "Registering..." } else { "Register" }
                    }
                }
            }
        }
    }
}
