//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod request;
pub use request::{RequestSeq, RequestState};

mod clients;
pub use clients::{make_advisor, make_profiles};

mod logo;
pub use logo::Logo;

mod shell;
pub use shell::{AppSidebar, ShellView, Tab};

pub mod views;
pub use views::{
    ChatView, DashboardView, DocumentsView, GetStartedView, LoginView, ProfileView,
};
