use dioxus::prelude::*;

mod views;

use types::{Identity, nav};
use views::{Buildings, ComingSoon, Dashboard, Login, Monitoring, Settings, Users, Visitors};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login?:error&:notice")]
    Login { error: Option<String>, notice: Option<String> },
    #[layout(AuthenticatedLayout)]
        #[route("/?:welcome")]
        Dashboard { welcome: Option<String> },
        #[route("/users")]
        Users {},
        #[route("/visitors")]
        Visitors {},
        #[route("/buildings")]
        Buildings {},
        #[route("/payments")]
        Payments {},
        #[route("/communication")]
        Communication {},
        #[route("/maps")]
        BuildingMaps {},
        #[route("/monitoring")]
        Monitoring {},
        #[route("/settings")]
        Settings {},
        #[route("/support")]
        Support {},
}

impl Route {
    pub fn dashboard() -> Self {
        Route::Dashboard { welcome: None }
    }

    pub fn login() -> Self {
        Route::Login {
            error: None,
            notice: None,
        }
    }

    /// The route behind a sidebar entry.
    fn for_menu_path(path: &str) -> Self {
        match path {
            "/users" => Route::Users {},
            "/visitors" => Route::Visitors {},
            "/buildings" => Route::Buildings {},
            "/payments" => Route::Payments {},
            "/communication" => Route::Communication {},
            "/maps" => Route::BuildingMaps {},
            "/monitoring" => Route::Monitoring {},
            "/settings" => Route::Settings {},
            "/support" => Route::Support {},
            _ => Route::dashboard(),
        }
    }
}

#[component]
fn Payments() -> Element {
    rsx! { ComingSoon { title: "Payments" } }
}

#[component]
fn Communication() -> Element {
    rsx! { ComingSoon { title: "Communication" } }
}

#[component]
fn BuildingMaps() -> Element {
    rsx! { ComingSoon { title: "Building Maps" } }
}

#[component]
fn Support() -> Element {
    rsx! { ComingSoon { title: "Support" } }
}

fn main() {
    #[cfg(feature = "server")]
    {
        server::init_tracing();
        dioxus::serve(|| async move {
            let routes = server::init().await?;

            Ok(dioxus::server::router(App).merge(routes))
        });
    }

    #[cfg(all(feature = "web", not(feature = "server")))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "BMS Portal" }
        document::Link { rel: "icon", href: asset!("/assets/favicon.svg") }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        Router::<Route> {}
    }
}

#[component]
fn NavLink(to: Route, children: Element) -> Element {
    let current_route: Route = use_route();
    let is_active = std::mem::discriminant(&current_route) == std::mem::discriminant(&to);

    rsx! {
        Link {
            to,
            class: if is_active { "active" },
            {children}
        }
    }
}

/// A user-visible toast: every login/logout, CRUD action, and load failure
/// surfaces one.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Global notice state - use `use_notice()` to access.
#[derive(Clone, Copy)]
pub struct NoticeState(Signal<Option<Notice>>);

impl NoticeState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.0.set(Some(Notice {
            message: message.into(),
            kind: NoticeKind::Success,
        }));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.0.set(Some(Notice {
            message: message.into(),
            kind: NoticeKind::Error,
        }));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

pub fn use_notice() -> NoticeState {
    use_context::<NoticeState>()
}

#[component]
fn NoticeBanner() -> Element {
    let mut notice_state = use_context::<NoticeState>();
    let notice = notice_state.0.read();

    if let Some(notice) = notice.as_ref() {
        let class = match notice.kind {
            NoticeKind::Success => "notice-banner notice-success",
            NoticeKind::Error => "notice-banner notice-error",
        };
        rsx! {
            div { class,
                span { class: "notice-message", "{notice.message}" }
                button {
                    class: "notice-close",
                    onclick: move |_| notice_state.clear(),
                    "×"
                }
            }
        }
    } else {
        rsx! {}
    }
}

fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
}

#[component]
fn AuthenticatedLayout() -> Element {
    let user = use_server_future(api::get_current_user)?;
    use_context_provider(|| NoticeState(Signal::new(None)));
    let mut current = use_context_provider(|| Signal::new(None::<Identity>));

    use_effect(move || {
        if let Some(Ok(Some(identity))) = &*user.read() {
            current.set(Some(identity.clone()));
        }
    });

    match &*user.read() {
        Some(Ok(Some(identity))) => {
            let identity = identity.clone();
            let meta = identity.role.metadata();
            let avatar_initials = initials(&identity.name);

            rsx! {
                div { class: "app-layout",
                    aside { class: "sidebar",
                        div { class: "sidebar-header",
                            span { class: "sidebar-logo", "BMS Portal" }
                            span { class: "sidebar-tagline", "Innovative Labs" }
                        }
                        div { class: "sidebar-user",
                            div { class: "sidebar-avatar", "{avatar_initials}" }
                            div { class: "sidebar-user-info",
                                div { class: "sidebar-user-name", "{identity.name}" }
                                div { class: "sidebar-user-role role-{meta.color}", "{meta.label}" }
                                if let Some(society) = identity.society.as_ref() {
                                    div { class: "sidebar-user-scope", "{society}" }
                                }
                                if let Some(building) = identity.building.as_ref() {
                                    div { class: "sidebar-user-scope", "{building}" }
                                }
                            }
                        }
                        nav { class: "sidebar-nav",
                            for item in nav::visible_menu(identity.role) {
                                NavLink {
                                    to: Route::for_menu_path(item.path),
                                    span { class: "nav-icon nav-icon-{item.icon}" }
                                    "{item.label}"
                                }
                            }
                        }
                        div { class: "sidebar-footer",
                            a { href: "/auth/logout", rel: "external", class: "sidebar-logout", "Sign Out" }
                        }
                    }
                    main { class: "main-content",
                        NoticeBanner {}
                        Outlet::<Route> {}
                    }
                }
            }
        }
        Some(Ok(None)) | Some(Err(_)) => {
            let nav = navigator();
            nav.push(Route::login());
            rsx! {
                div { class: "loading", "Redirecting to login..." }
            }
        }
        None => {
            rsx! {
                div { class: "loading", "Loading BMS Portal..." }
            }
        }
    }
}
