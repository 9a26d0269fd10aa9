//! Login page. Sign-in is simulated — no credential handling, no session.

use dioxus::prelude::*;

use crate::Logo;

const LOGIN_CSS: Asset = asset!("/assets/styling/login.css");

#[component]
pub fn LoginView(on_login: EventHandler<()>) -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    rsx! {
        document::Stylesheet { href: LOGIN_CSS }

        div {
            class: "login-page",
            div {
                class: "card login-card",

                div {
                    class: "login-brand",
                    Logo { size: 80 }
                    h1 { class: "login-title", "Edulynx" }
                    p { class: "login-subtitle", "Sign in to start your global education journey" }
                }

                div {
                    class: "form-field",
                    label { "Email Address" }
                    input {
                        r#type: "email",
                        required: true,
                        placeholder: "you@university.com",
                        value: email(),
                        oninput: move |evt| email.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        required: true,
                        placeholder: "••••••••",
                        value: password(),
                        oninput: move |evt| password.set(evt.value()),
                    }
                }

                div {
                    class: "login-options",
                    label {
                        class: "login-remember",
                        input { r#type: "checkbox" }
                        span { "Remember me" }
                    }
                    a { class: "login-link", href: "#", "Forgot password?" }
                }

                button {
                    class: "login-submit",
                    onclick: move |_| on_login.call(()),
                    "Sign In"
                }

                p {
                    class: "login-footer",
                    "Don't have an account? "
                    a { class: "login-link", href: "#", "Create an account" }
                }
            }
        }
    }
}
