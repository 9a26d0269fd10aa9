use dioxus::prelude::*;

use views::{Fallback, GetStarted, Home, Login};

mod views;

/// Top-level views, dispatched exhaustively from the location.
///
/// Anything outside the two named locations — including the bare root and
/// `/dashboard`, where the wizard lands — resolves to the authenticated
/// shell. Unknown locations stay inside the app rather than hitting an
/// error page.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/get-started")]
    GetStarted {},
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_locations_resolve_to_their_views() {
        assert_eq!("/login".parse::<Route>().unwrap(), Route::Login {});
        assert_eq!(
            "/get-started".parse::<Route>().unwrap(),
            Route::GetStarted {}
        );
    }

    #[test]
    fn test_everything_else_resolves_to_the_shell() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Home {});
        assert!(matches!(
            "/dashboard".parse::<Route>().unwrap(),
            Route::Fallback { .. }
        ));
        assert!(matches!(
            "/no/such/view".parse::<Route>().unwrap(),
            Route::Fallback { .. }
        ));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let first = "/login".parse::<Route>().unwrap();
        let second = "/login".parse::<Route>().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_routes_display_their_location() {
        assert_eq!(Route::Login {}.to_string(), "/login");
        assert_eq!(Route::GetStarted {}.to_string(), "/get-started");
    }
}
