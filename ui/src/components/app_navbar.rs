use dioxus::prelude::*;
use once_cell::sync::OnceCell;

use crate::i18n::{self};
use crate::nav::{MenuState, NavDestination};
use crate::t;

use super::auth_controls::{SignInButton, SignUpButton, SignedIn, SignedOut, UserButton};
use super::icons::{CloseIcon, MenuIcon};

// Navbar stylesheet + brand logo
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));
const LOGO: Asset = asset!("/assets/logo.svg");

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// The builder is called once per [`NavDestination`] with the localized
/// label and must return a link that contains that label as its child
/// (both the desktop list and the mobile overlay go through it).
///
/// If no builder is registered, `AppNavbar` falls back to any raw
/// `children` passed, so the crate stays previewable without platform
/// glue.
///
/// Wiring in a platform crate (web/desktop):
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// use ui::nav::NavDestination;
///
/// fn nav_link(dest: NavDestination, label: &str) -> Element {
///     let route = match dest {
///         NavDestination::Home => Route::Home {},
///         // ...one arm per destination
///     };
///     rsx!( Link { class: "navbar__link", to: route, "{label}" } )
/// }
///
/// fn install_nav() {
///     register_nav(NavBuilder { link: nav_link });
/// }
/// ```
pub struct NavBuilder {
    /// Returns a link for the destination whose child is exactly the
    /// localized label string passed in.
    pub link: fn(dest: NavDestination, label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// Localized label for a destination. Every render pulls fresh strings
/// so a language switch shows up immediately.
fn destination_label(dest: NavDestination) -> String {
    match dest {
        NavDestination::Home => t!("nav-home"),
        NavDestination::Modules => t!("nav-modules"),
        NavDestination::Topics => t!("nav-topics"),
        NavDestination::Analytics => t!("nav-analytics"),
        NavDestination::Chat => t!("nav-chat"),
    }
}

/// Application navigation bar.
///
/// Renders the brand block, the desktop link list, the
/// session-conditional auth cluster, and the mobile overlay menu. The
/// overlay is driven by a single [`MenuState`] owned by this component:
/// fresh mounts start closed, the burger and close glyphs toggle it, and
/// any overlay link click closes it on the way out.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    let mut menu = use_signal(MenuState::default);

    let mut current_lang = use_signal(|| "en-US".to_string());
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    // Obtain the global language code signal if the platform provided it.
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Establish a reactive dependency on the global language code (if provided)
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_lang_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        if i18n::set_language(&val).is_ok() {
            current_lang.set(val.clone());
            // Propagate to the global language code signal if present
            if let Some(mut code) = lang_code_ctx {
                code.set(val);
            }
        }
    };

    // Build the localized desktop nav if a builder is registered.
    let internal_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        rsx! {
            nav { class: "navbar__links",
                for dest in NavDestination::ALL {
                    {(b.link)(dest, &destination_label(dest))}
                }
            }
        }
        .expect("AppNavbar: nav rsx render failed")
    });

    // Overlay variant of the same links. Each entry wraps the built link
    // so a click both navigates (Link) and closes the overlay (wrapper,
    // via bubbling).
    let overlay_nav: Option<VNode> = NAV_BUILDER.get().map(|b| {
        rsx! {
            for dest in NavDestination::ALL {
                li {
                    class: "navbar__overlay-item",
                    onclick: move |_| menu.write().close(),
                    {(b.link)(dest, &destination_label(dest))}
                }
            }
        }
        .expect("AppNavbar: overlay rsx render failed")
    });

    let tagline = t!("tagline");

    rsx! {
        // Include the navbar stylesheet (and inline in release native)
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            // Hidden marker ensures the navbar re-renders when the global language signal changes.
            div { style: "display:none", "{_lang_marker}" }
            div { class: "navbar__inner",
                // Brand
                div { class: "navbar__brand",
                    img {
                        class: "navbar__brand-logo",
                        src: LOGO,
                        width: "50",
                        height: "50",
                        alt: "CS Prime logo",
                    }
                    div { class: "navbar__brand-text",
                        span { class: "navbar__brand-mark", "CS Prime" }
                        span { class: "navbar__brand-subtitle", "{tagline}" }
                    }
                }

                // Navigation (registered builder, or legacy children fallback)
                if let Some(nav) = internal_nav {
                    {nav}
                } else {
                    nav { class: "navbar__links", {children} }
                }

                // Auth cluster: the two boundaries are mutually exclusive.
                ul { class: "navbar__auth",
                    SignedOut {
                        li { class: "navbar__auth-item", SignInButton {} }
                        li { class: "navbar__auth-item", SignUpButton {} }
                    }
                    SignedIn {
                        li { class: "navbar__auth-item", UserButton {} }
                    }
                }

                // Locale switcher
                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_lang_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }

                // Mobile-only toggle
                button {
                    class: "navbar__burger",
                    "aria-expanded": "{menu().is_open()}",
                    aria_label: t!("nav-menu-open"),
                    onclick: move |_| menu.write().toggle(),
                    MenuIcon {}
                }
            }

            // Full-screen overlay menu; visibility is a pure class flip.
            div { class: menu().overlay_class(),
                ul { class: "navbar__overlay-links",
                    if let Some(links) = overlay_nav {
                        {links}
                    }
                    // Static placeholders mirroring the desktop auth cluster.
                    li { class: "navbar__overlay-auth navbar__overlay-auth--ghost",
                        {t!("auth-sign-in")}
                    }
                    li { class: "navbar__overlay-auth navbar__overlay-auth--primary",
                        {t!("auth-sign-up")}
                    }
                }
                button {
                    class: "navbar__overlay-close",
                    aria_label: t!("nav-menu-close"),
                    onclick: move |_| menu.write().toggle(),
                    CloseIcon {}
                }
            }
        }
    }
}
