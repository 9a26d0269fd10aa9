use dioxus::prelude::*;
use ui::GetStartedView;

use crate::Route;

/// Onboarding wizard. Completing it navigates one-way to the dashboard —
/// `replace` rather than `push`, so the wizard is not in the back stack.
#[component]
pub fn GetStarted() -> Element {
    let nav = use_navigator();

    rsx! {
        GetStartedView {
            on_complete: move |_| {
                nav.replace(Route::Home {});
            },
        }
    }
}
