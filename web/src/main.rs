use dioxus::prelude::*;

use ui::auth::{register_auth, AuthHooks, SessionState, UserProfile, SESSION};
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::nav::NavDestination;
use ui::views::{Analytics, Chat, Home, Modules, Topics};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/modules")]
    Modules {},
    #[route("/topics")]
    Topics {},
    #[route("/analytics")]
    Analytics {},
    #[route("/chat")]
    Chat {},
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_link(dest: NavDestination, label: &str) -> Element {
    let link = |route: Route, label: &str| {
        rsx!(Link {
            class: "navbar__link",
            to: route,
            "{label}"
        })
    };
    match dest {
        NavDestination::Home => link(Route::Home {}, label),
        NavDestination::Modules => link(Route::Modules {}, label),
        NavDestination::Topics => link(Route::Topics {}, label),
        NavDestination::Analytics => link(Route::Analytics {}, label),
        NavDestination::Chat => link(Route::Chat {}, label),
    }
}

// Local session stand-in so the signed-in cluster is exercisable.
// TODO: replace with the hosted identity SDK bridge when it lands.
fn sign_in() {
    *SESSION.write() = SessionState::SignedIn(UserProfile::new("Demo Student"));
}

fn sign_up() {
    sign_in();
}

fn sign_out() {
    *SESSION.write() = SessionState::SignedOut;
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // Global reactive language code; AppNavbar updates it on locale change.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Register the route-typed nav builder and the auth triggers.
    register_nav(NavBuilder { link: nav_link });
    register_auth(AuthHooks {
        sign_in,
        sign_up,
        sign_out,
    });

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific layout around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
