//! The authenticated shell: persistent side navigation plus one active page.
//!
//! The active tab lives in a single signal here — it is not reflected in the
//! location, so a full reload always comes back to the dashboard.

use dioxus::prelude::*;

use crate::icons::{FaChartLine, FaComments, FaFileLines, FaRightFromBracket, FaUser};
use crate::views::{ChatView, DashboardView, DocumentsView, ProfileView};
use crate::{Icon, Logo};

const SHELL_CSS: Asset = asset!("/assets/styling/shell.css");

/// In-app tab inside the authenticated shell. Not persisted across reloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Chat,
    Documents,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Chat, Tab::Documents, Tab::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Chat => "AI Advisor",
            Tab::Documents => "Documents",
            Tab::Profile => "My Profile",
        }
    }
}

/// Shell view: sidebar plus the page picked by the active tab.
#[component]
pub fn ShellView(on_logout: EventHandler<()>) -> Element {
    let mut active_tab = use_signal(Tab::default);

    let page = match active_tab() {
        Tab::Dashboard => rsx! { DashboardView {} },
        Tab::Chat => rsx! { ChatView {} },
        Tab::Documents => rsx! { DocumentsView {} },
        Tab::Profile => rsx! { ProfileView {} },
    };

    rsx! {
        document::Stylesheet { href: SHELL_CSS }

        div {
            class: "shell",
            AppSidebar {
                active_tab: active_tab(),
                on_select: move |tab| active_tab.set(tab),
                on_logout: on_logout,
            }
            main {
                class: "shell-main",
                {page}
            }
        }
    }
}

#[component]
pub fn AppSidebar(
    active_tab: Tab,
    on_select: EventHandler<Tab>,
    on_logout: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                Logo { size: 36 }
                span { class: "sidebar-brand-name", "Edulynx" }
            }

            nav {
                class: "sidebar-nav",
                for tab in Tab::ALL {
                    button {
                        key: "{tab.label()}",
                        class: if tab == active_tab { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_select.call(tab),
                        {tab_icon(tab)}
                        span { "{tab.label()}" }
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                button {
                    class: "sidebar-item",
                    onclick: move |_| on_logout.call(()),
                    Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                    span { "Log out" }
                }
            }
        }
    }
}

fn tab_icon(tab: Tab) -> Element {
    match tab {
        Tab::Dashboard => rsx! { Icon { icon: FaChartLine, width: 16, height: 16 } },
        Tab::Chat => rsx! { Icon { icon: FaComments, width: 16, height: 16 } },
        Tab::Documents => rsx! { Icon { icon: FaFileLines, width: 16, height: 16 } },
        Tab::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
    }
}
