use dioxus::prelude::*;
use types::Role;

/// Demo account behind each role's quick-fill card.
fn demo_email(role: Role) -> Option<&'static str> {
    match role {
        Role::SuperAdmin | Role::Admin => Some("admin@innovativelabs.com"),
        Role::Secretary => Some("secretary@innovativelabs.com"),
        Role::Security => Some("security@innovativelabs.com"),
        Role::Developer => Some("dev@innovativelabs.com"),
        Role::Resident => Some("resident@innovativelabs.com"),
        Role::Guest => None,
    }
}

fn error_message(code: &str) -> &str {
    match code {
        "invalid_credentials" => {
            "Invalid email or password. Try: admin@innovativelabs.com / password123"
        }
        "session_error" => "Your session could not be created. Please try again.",
        other => other,
    }
}

fn notice_message(code: &str) -> &str {
    match code {
        "logged_out" => "You have been successfully logged out.",
        other => other,
    }
}

#[component]
pub fn Login(error: Option<String>, notice: Option<String>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                div { class: "login-header",
                    h1 { class: "login-title", "BMS Portal" }
                    p { class: "login-subtitle", "Innovative Labs · Building Management System" }
                }

                if let Some(error) = error.as_ref() {
                    div { class: "alert alert-error", "{error_message(error)}" }
                }
                if let Some(notice) = notice.as_ref() {
                    div { class: "alert alert-success", "{notice_message(notice)}" }
                }

                // A plain form post: the server validates credentials, sets
                // the session cookie, and redirects.
                form {
                    action: "/auth/login",
                    method: "post",
                    div { class: "form-group",
                        label { class: "form-label", r#for: "email", "Email" }
                        input {
                            id: "email",
                            name: "email",
                            class: "form-input",
                            r#type: "email",
                            placeholder: "admin@innovativelabs.com",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { class: "form-label", r#for: "password", "Password" }
                        input {
                            id: "password",
                            name: "password",
                            class: "form-input",
                            r#type: "password",
                            placeholder: "password123",
                            value: "{password}",
                            oninput: move |e| password.set(e.value()),
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary login-btn",
                        "Sign In"
                    }
                }

                div { class: "login-roles",
                    p { class: "login-roles-hint", "Demo accounts (password: password123)" }
                    for role in Role::ALL {
                        if let Some(demo) = demo_email(role) {
                            {
                                let meta = role.metadata();
                                rsx! {
                                    button {
                                        class: "login-role-card",
                                        onclick: move |_| {
                                            email.set(demo.to_string());
                                            password.set("password123".to_string());
                                        },
                                        span { class: "login-role-label role-{meta.color}", "{meta.label}" }
                                        span { class: "login-role-desc", "{meta.description}" }
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
