//! The authenticated shell and its catch-all alias.

use dioxus::prelude::*;
use ui::ShellView;

use crate::Route;

/// Default view: the authenticated shell. The active tab is in-memory state
/// inside the shell and resets on full reload.
#[component]
pub fn Home() -> Element {
    let nav = use_navigator();

    rsx! {
        ShellView {
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}

/// Any unrecognized location falls through to the shell.
#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! {
        Home {}
    }
}
