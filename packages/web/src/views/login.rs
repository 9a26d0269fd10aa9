use dioxus::prelude::*;
use ui::LoginView;

use crate::Route;

/// Login page. Sign-in is simulated: submit moves straight to onboarding.
#[component]
pub fn Login() -> Element {
    let nav = use_navigator();

    rsx! {
        LoginView {
            on_login: move |_| {
                nav.push(Route::GetStarted {});
            },
        }
    }
}
