use dioxus::prelude::*;
use types::settings::Settings as SettingsData;

use crate::use_notice;

/// One labeled toggle row in the settings panel.
#[component]
fn ToggleRow(
    label: String,
    hint: String,
    checked: bool,
    on_toggle: EventHandler<bool>,
) -> Element {
    rsx! {
        div { class: "settings-row",
            div { class: "settings-row-text",
                span { class: "settings-row-label", "{label}" }
                span { class: "settings-row-hint", "{hint}" }
            }
            input {
                r#type: "checkbox",
                checked,
                onchange: move |e| on_toggle.call(e.checked()),
            }
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let mut notice = use_notice();
    let mut settings = use_signal(SettingsData::default);
    let mut api_base_url = use_signal(String::new);
    let mut loading = use_signal(|| true);
    let mut saving = use_signal(|| false);

    use_effect(move || {
        spawn(async move {
            loading.set(true);
            match api::get_settings().await {
                Ok(fetched) => {
                    api_base_url.set(fetched.api_base_url.to_string());
                    settings.set(fetched);
                }
                Err(e) => notice.error(e.to_string()),
            }
            loading.set(false);
        });
    });

    let save = move |_| {
        let url_text = api_base_url.read().clone();
        let parsed = match url_text.parse() {
            Ok(url) => url,
            Err(_) => {
                notice.error(format!("'{url_text}' is not a valid URL"));
                return;
            }
        };
        let mut payload = settings.read().clone();
        payload.api_base_url = parsed;
        spawn(async move {
            saving.set(true);
            match api::update_settings(payload).await {
                Ok(stored) => {
                    settings.set(stored);
                    notice.success("Settings saved");
                }
                Err(e) => notice.error(e.to_string()),
            }
            saving.set(false);
        });
    };

    if *loading.read() {
        return rsx! {
            div { class: "loading", "Loading settings..." }
        };
    }

    let current = settings.read().clone();

    rsx! {
        div {
            div { class: "page-header",
                div { class: "page-header-content",
                    h1 { class: "page-title", "Settings" }
                    p { class: "page-subtitle", "Manage system preferences and configurations." }
                }
                div { class: "page-header-actions",
                    button {
                        class: "btn btn-primary",
                        disabled: *saving.read(),
                        onclick: save,
                        if *saving.read() { "Saving..." } else { "Save Changes" }
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Notification Preferences" }
                }
                ToggleRow {
                    label: "Email Notifications",
                    hint: "Receive updates via email",
                    checked: current.email_notifications,
                    on_toggle: move |value| settings.with_mut(|s| s.email_notifications = value),
                }
                ToggleRow {
                    label: "Push Notifications",
                    hint: "Browser push notifications",
                    checked: current.push_notifications,
                    on_toggle: move |value| settings.with_mut(|s| s.push_notifications = value),
                }
                ToggleRow {
                    label: "SMS Notifications",
                    hint: "Receive critical alerts via SMS",
                    checked: current.sms_notifications,
                    on_toggle: move |value| settings.with_mut(|s| s.sms_notifications = value),
                }
                ToggleRow {
                    label: "Visitor Alerts",
                    hint: "Get notified about visitor entries",
                    checked: current.visitor_alerts,
                    on_toggle: move |value| settings.with_mut(|s| s.visitor_alerts = value),
                }
                ToggleRow {
                    label: "Maintenance Alerts",
                    hint: "Payment reminders and updates",
                    checked: current.maintenance_alerts,
                    on_toggle: move |value| settings.with_mut(|s| s.maintenance_alerts = value),
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Security" }
                }
                ToggleRow {
                    label: "Two-Factor Authentication",
                    hint: "Add an extra layer of security",
                    checked: current.two_factor_auth,
                    on_toggle: move |value| settings.with_mut(|s| s.two_factor_auth = value),
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "session-timeout", "Session Timeout (minutes)" }
                    input {
                        id: "session-timeout",
                        class: "form-input",
                        r#type: "number",
                        min: "1",
                        value: "{current.session_timeout_minutes}",
                        oninput: move |e| {
                            if let Ok(minutes) = e.value().parse() {
                                settings.with_mut(|s| s.session_timeout_minutes = minutes);
                            }
                        },
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "password-expiry", "Password Expiry (days)" }
                    input {
                        id: "password-expiry",
                        class: "form-input",
                        r#type: "number",
                        min: "1",
                        value: "{current.password_expiry_days}",
                        oninput: move |e| {
                            if let Ok(days) = e.value().parse() {
                                settings.with_mut(|s| s.password_expiry_days = days);
                            }
                        },
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "System" }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "timezone", "Timezone" }
                    input {
                        id: "timezone",
                        class: "form-input",
                        r#type: "text",
                        value: "{current.timezone}",
                        oninput: move |e| settings.with_mut(|s| s.timezone = e.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "language", "Language" }
                    input {
                        id: "language",
                        class: "form-input",
                        r#type: "text",
                        value: "{current.language}",
                        oninput: move |e| settings.with_mut(|s| s.language = e.value()),
                    }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "date-format", "Date Format" }
                    input {
                        id: "date-format",
                        class: "form-input",
                        r#type: "text",
                        value: "{current.date_format}",
                        oninput: move |e| settings.with_mut(|s| s.date_format = e.value()),
                    }
                }
            }

            div { class: "card",
                div { class: "card-header",
                    h2 { class: "card-title", "Integration" }
                }
                div { class: "form-group",
                    label { class: "form-label", r#for: "api-base-url", "API Base URL" }
                    input {
                        id: "api-base-url",
                        class: "form-input",
                        r#type: "url",
                        value: "{api_base_url}",
                        oninput: move |e| api_base_url.set(e.value()),
                    }
                }
                ToggleRow {
                    label: "Enable Analytics",
                    hint: "Collect anonymous usage metrics",
                    checked: current.enable_analytics,
                    on_toggle: move |value| settings.with_mut(|s| s.enable_analytics = value),
                }
                ToggleRow {
                    label: "Enable Logging",
                    hint: "Keep detailed request logs",
                    checked: current.enable_logging,
                    on_toggle: move |value| settings.with_mut(|s| s.enable_logging = value),
                }
            }
        }
    }
}
