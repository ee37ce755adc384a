use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn ComingSoon(title: String) -> Element {
    rsx! {
        div { class: "coming-soon",
            div { class: "card coming-soon-card",
                h1 { class: "page-title", "{title}" }
                p { class: "page-subtitle",
                    "This feature is currently under development and will be available soon."
                }
                p { class: "text-muted",
                    "Our development team is working hard to bring you this functionality. "
                    "Please check back later or contact support if you need immediate assistance."
                }
                Link {
                    to: Route::dashboard(),
                    class: "btn btn-secondary",
                    "Back to Dashboard"
                }
            }
        }
    }
}
