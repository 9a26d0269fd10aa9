use dioxus::prelude::*;

/// Placeholder profile tab.
#[component]
pub fn ProfileView() -> Element {
    rsx! {
        div {
            class: "profile-page",
            h2 { class: "page-title", "My Profile" }
            p { class: "page-subtitle", "Profile management feature coming soon." }
        }
    }
}
