#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::auth::{register_auth, AuthHooks, SessionState, UserProfile, SESSION};
use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::nav::NavDestination;
use ui::views::{Analytics, Chat, Home, Modules, Topics};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
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

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme (ui/assets/theme/main.css); no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let resource_dir = resolve_resource_dir();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("CS Prime – v{}", env!("CARGO_PKG_VERSION")))
                        .with_maximized(true),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_link(dest: NavDestination, label: &str) -> Element {
    let link = |route: Route, label: &str| {
        rsx!(Link { class: "navbar__link", to: route, "{label}" })
    };
    match dest {
        NavDestination::Home => link(Route::Home {}, label),
        NavDestination::Modules => link(Route::Modules {}, label),
        NavDestination::Topics => link(Route::Topics {}, label),
        NavDestination::Analytics => link(Route::Analytics {}, label),
        NavDestination::Chat => link(Route::Chat {}, label),
    }
}

// Local session stand-in; the desktop identity bridge is platform glue
// that lives outside the shared components.
fn sign_in() {
    *SESSION.write() = SessionState::SignedIn(UserProfile::new("Demo Student"));
}

fn sign_up() {
    sign_in();
}

fn sign_out() {
    *SESSION.write() = SessionState::SignedOut;
}

#[component]
fn App() -> Element {
    // Initialize i18n once
    ui::i18n::init();

    // Provide the global reactive language code signal (mirrors web approach).
    // AppNavbar (shared) will update this via context on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);

    // Register the route-typed nav builder and the auth triggers.
    register_nav(NavBuilder { link: nav_link });
    register_auth(AuthHooks {
        sign_in,
        sign_up,
        sign_out,
    });

    // Runtime maximize fallback (in case initial builder maximize is ignored by WM)
    #[cfg(feature = "desktop")]
    {
        let win = dioxus::desktop::use_window();
        use_effect(move || {
            win.set_maximized(true);
        });
    }

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        // Keyed wrapper div to force full remount on language change and include a hidden
        // reactive marker so we always depend on the lang_code signal.
        div {
            key: "{lang_code()}",
            div { style: "display:none", "{lang_code()}" }
            Router::<Route> { }
        }
    }
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// A desktop-specific layout around the shared `AppNavbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
