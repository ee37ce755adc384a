use dioxus::prelude::*;
use std::str::FromStr;
use types::{
    AccountStatus, Identity, Role,
    user::{ManagedUser, NewUser, UserPatch, UserQuery},
};

use crate::use_notice;
use crate::views::components::{RoleBadge, StatusBadge};

fn page_title(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin | Role::Admin => "User Management",
        Role::Secretary => "Resident Management",
        Role::Security => "Building Residents",
        _ => "Users",
    }
}

fn page_description(identity: &Identity) -> String {
    match identity.role {
        Role::SuperAdmin => "Manage all users across the system".into(),
        Role::Admin => "Manage users in your assigned properties".into(),
        Role::Secretary => format!(
            "Manage residents in {}",
            identity.society.as_deref().unwrap_or("your society")
        ),
        Role::Security => format!(
            "View residents in {}",
            identity.building.as_deref().unwrap_or("your building")
        ),
        _ => "User information".into(),
    }
}

#[component]
pub fn Users() -> Element {
    let current: Signal<Option<Identity>> = use_context();
    let mut notice = use_notice();

    let mut users = use_signal(Vec::<ManagedUser>::new);
    let mut loading = use_signal(|| true);
    let mut search = use_signal(String::new);
    let mut role_filter = use_signal(|| None::<Role>);
    let mut show_create = use_signal(|| false);
    let mut editing = use_signal(|| None::<ManagedUser>);
    let mut deleting = use_signal(|| None::<ManagedUser>);

    // Refetch whenever the search term or role filter changes. RBAC is
    // applied server-side before these filters ever see the list.
    use_effect(move || {
        let query = UserQuery {
            search: search(),
            role: role_filter(),
            status: None,
        };
        spawn(async move {
            loading.set(true);
            match api::get_users(query).await {
                Ok(list) => users.set(list),
                Err(e) => notice.error(e.to_string()),
            }
            loading.set(false);
        });
    });

    let refresh = move || {
        let query = UserQuery {
            search: search(),
            role: role_filter(),
            status: None,
        };
        spawn(async move {
            if let Ok(list) = api::get_users(query).await {
                users.set(list);
            }
        });
    };

    let Some(identity) = current() else {
        return rsx! {
            div { class: "loading", "Loading..." }
        };
    };
    let can_manage = identity.role.can_manage_users();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "{page_title(identity.role)}" }
                    p { class: "page-subtitle", "{page_description(&identity)}" }
                }
                if can_manage {
                    div { class: "page-header-actions",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_create.set(true),
                            "Add User"
                        }
                    }
                }
            }

            div { class: "filter-bar",
                input {
                    class: "form-input filter-search",
                    r#type: "search",
                    placeholder: "Search by name, email, or phone...",
                    value: "{search}",
                    oninput: move |e| search.set(e.value()),
                }
                select {
                    class: "form-input filter-select",
                    onchange: move |e| role_filter.set(Role::from_str(&e.value()).ok()),
                    option { value: "all", "All roles" }
                    for role in Role::ALL {
                        option { value: "{role.as_str()}", "{role.metadata().label}" }
                    }
                }
            }

            if *show_create.read() {
                CreateUserModal {
                    on_close: move |_| show_create.set(false),
                    on_created: move |_| {
                        show_create.set(false);
                        refresh();
                    },
                }
            }

            if let Some(user) = editing() {
                EditUserModal {
                    user,
                    on_close: move |_| editing.set(None),
                    on_updated: move |_| {
                        editing.set(None);
                        refresh();
                    },
                }
            }

            if let Some(user) = deleting() {
                DeleteUserModal {
                    user,
                    on_close: move |_| deleting.set(None),
                    on_deleted: move |_| {
                        deleting.set(None);
                        refresh();
                    },
                }
            }

            if *loading.read() {
                div { class: "loading", "Loading users..." }
            } else if users.read().is_empty() {
                div { class: "card empty-state",
                    p { "No users match your view." }
                }
            } else {
                div { class: "card",
                    div { class: "table-container",
                        table {
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Role" }
                                    th { "Residence" }
                                    th { "Status" }
                                    if can_manage {
                                        th { "" }
                                    }
                                }
                            }
                            tbody {
                                for user in users.read().iter() {
                                    {
                                        let user = user.clone();
                                        let edit_target = user.clone();
                                        let delete_target = user.clone();
                                        let residence = match (user.building.as_deref(), user.flat.as_deref()) {
                                            (Some(building), Some(flat)) => format!("{building} · {flat}"),
                                            (Some(building), None) => building.to_string(),
                                            _ => "—".to_string(),
                                        };
                                        rsx! {
                                            tr {
                                                td {
                                                    div { class: "cell-primary", "{user.name}" }
                                                    if let Some(phone) = user.phone.as_ref() {
                                                        div { class: "cell-secondary", "{phone}" }
                                                    }
                                                }
                                                td { "{user.email}" }
                                                td {
                                                    RoleBadge { role: user.role }
                                                }
                                                td { "{residence}" }
                                                td {
                                                    StatusBadge { status: user.status }
                                                }
                                                if can_manage {
                                                    td { class: "cell-actions",
                                                        button {
                                                            class: "btn btn-link",
                                                            onclick: move |_| editing.set(Some(edit_target.clone())),
                                                            "Edit"
                                                        }
                                                        button {
                                                            class: "btn btn-link btn-link-danger",
                                                            onclick: move |_| deleting.set(Some(delete_target.clone())),
                                                            "Delete"
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
fn CreateUserModal(on_close: EventHandler<()>, on_created: EventHandler<()>) -> Element {
    let mut notice = use_notice();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut role = use_signal(|| Role::Resident);
    let mut society = use_signal(String::new);
    let mut building = use_signal(String::new);
    let mut flat = use_signal(String::new);
    let mut creating = use_signal(|| false);

    let can_submit = !name.read().is_empty() && !email.read().is_empty();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Add User" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "name", "Name *" }
                        input {
                            id: "name",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. Jane Smith",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email *" }
                        input {
                            id: "email",
                            class: "form-input",
                            r#type: "email",
                            placeholder: "e.g. jane.smith@email.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "phone", "Phone" }
                        input {
                            id: "phone",
                            class: "form-input",
                            r#type: "tel",
                            placeholder: "e.g. +1-234-567-8900",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "role", "Role" }
                        select {
                            id: "role",
                            class: "form-input",
                            onchange: move |e| {
                                if let Ok(parsed) = e.value().parse() {
                                    role.set(parsed);
                                }
                            },
                            for option_role in Role::ALL {
                                option {
                                    value: "{option_role.as_str()}",
                                    selected: option_role == role(),
                                    "{option_role.metadata().label}"
                                }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "society", "Society" }
                        input {
                            id: "society",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. Sunset Gardens",
                            value: "{society}",
                            oninput: move |e| society.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "building", "Building" }
                        input {
                            id: "building",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. Tower A",
                            value: "{building}",
                            oninput: move |e| building.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "flat", "Flat" }
                        input {
                            id: "flat",
                            class: "form-input",
                            r#type: "text",
                            placeholder: "e.g. 502",
                            value: "{flat}",
                            oninput: move |e| flat.set(e.value()),
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
                        disabled: !can_submit || *creating.read(),
                        onclick: move |_| {
                            let new = NewUser {
                                email: email.read().clone(),
                                name: name.read().clone(),
                                phone: some_if_filled(&phone.read()),
                                role: Some(role()),
                                society: some_if_filled(&society.read()),
                                building: some_if_filled(&building.read()),
                                floor: None,
                                flat: some_if_filled(&flat.read()),
                            };
                            spawn(async move {
                                creating.set(true);
                                match api::create_user(new).await {
                                    Ok(user) => {
                                        notice.success(format!("User {} created", user.name));
                                        on_created.call(());
                                    }
                                    Err(e) => notice.error(e.to_string()),
                                }
                                creating.set(false);
                            });
                        },
                        if *creating.read() { "Creating..." } else { "Create" }
                    }
                }
            }
        }
    }
}

#[component]
fn EditUserModal(
    user: ManagedUser,
    on_close: EventHandler<()>,
    on_updated: EventHandler<()>,
) -> Element {
    let mut notice = use_notice();
    let mut name = use_signal(|| user.name.clone());
    let mut phone = use_signal(|| user.phone.clone().unwrap_or_default());
    let mut role = use_signal(|| user.role);
    let mut status = use_signal(|| user.status);
    let mut saving = use_signal(|| false);

    let user_id = user.id;

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Edit User" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    div { class: "form-group",
                        span { class: "form-label", "Email" }
                        div { class: "form-value", "{user.email}" }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "edit-name", "Name" }
                        input {
                            id: "edit-name",
                            class: "form-input",
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "edit-phone", "Phone" }
                        input {
                            id: "edit-phone",
                            class: "form-input",
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "edit-role", "Role" }
                        select {
                            id: "edit-role",
                            class: "form-input",
                            onchange: move |e| {
                                if let Ok(parsed) = e.value().parse() {
                                    role.set(parsed);
                                }
                            },
                            for option_role in Role::ALL {
                                option {
                                    value: "{option_role.as_str()}",
                                    selected: option_role == role(),
                                    "{option_role.metadata().label}"
                                }
                            }
                        }
                    }
                    div { class: "form-group",
                        label { class: "checkbox-label",
                            input {
                                r#type: "checkbox",
                                checked: status() == AccountStatus::Active,
                                onchange: move |e| {
                                    status.set(if e.checked() {
                                        AccountStatus::Active
                                    } else {
                                        AccountStatus::Inactive
                                    });
                                },
                            }
                            span { "Active account" }
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
                        disabled: *saving.read(),
                        onclick: move |_| {
                            let patch = UserPatch {
                                name: Some(name.read().clone()),
                                phone: some_if_filled(&phone.read()),
                                role: Some(role()),
                                status: Some(status()),
                                ..Default::default()
                            };
                            spawn(async move {
                                saving.set(true);
                                match api::update_user(user_id, patch).await {
                                    Ok(user) => {
                                        notice.success(format!("User {} updated", user.name));
                                        on_updated.call(());
                                    }
                                    Err(e) => notice.error(e.to_string()),
                                }
                                saving.set(false);
                            });
                        },
                        if *saving.read() { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}

#[component]
fn DeleteUserModal(
    user: ManagedUser,
    on_close: EventHandler<()>,
    on_deleted: EventHandler<()>,
) -> Element {
    let mut notice = use_notice();
    let mut deleting = use_signal(|| false);
    let user_id = user.id;
    let user_name = user.name.clone();

    rsx! {
        div { class: "modal-overlay",
            onclick: move |_| on_close.call(()),
            div { class: "modal",
                onclick: move |e| e.stop_propagation(),
                div { class: "modal-header",
                    h2 { class: "modal-title", "Delete User" }
                    button {
                        class: "modal-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    p { "Are you sure you want to delete " strong { "{user.name}" } "?" }
                    p { class: "text-muted", "This action cannot be undone." }
                }
                div { class: "modal-footer",
                    button {
                        class: "btn btn-secondary",
                        disabled: *deleting.read(),
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: *deleting.read(),
                        onclick: move |_| {
                            let user_name = user_name.clone();
                            spawn(async move {
                                deleting.set(true);
                                match api::delete_user(user_id).await {
                                    Ok(()) => {
                                        notice.success(format!("User {user_name} deleted"));
                                        on_deleted.call(());
                                    }
                                    Err(e) => notice.error(e.to_string()),
                                }
                                deleting.set(false);
                            });
                        },
                        if *deleting.read() { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }
    }
}

fn some_if_filled(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
