//! Session-conditional view boundaries and the auth trigger controls.
//!
//! `SignedOut` / `SignedIn` render their children only when the global
//! [`SESSION`] matches their variant, so callers compose the two without
//! branching themselves. The buttons forward clicks to whatever
//! [`AuthHooks`](crate::auth::AuthHooks) the platform registered.

use dioxus::prelude::*;

use crate::auth::{self, SessionState, SESSION};
use crate::t;

/// Renders children only while the visitor is signed out.
#[component]
pub fn SignedOut(children: Element) -> Element {
    match SESSION() {
        SessionState::SignedOut => rsx! { {children} },
        SessionState::SignedIn(_) => rsx! {},
    }
}

/// Renders children only while the visitor is signed in.
#[component]
pub fn SignedIn(children: Element) -> Element {
    match SESSION() {
        SessionState::SignedIn(_) => rsx! { {children} },
        SessionState::SignedOut => rsx! {},
    }
}

#[component]
pub fn SignInButton() -> Element {
    rsx! {
        button {
            class: "navbar__auth-button navbar__auth-button--ghost",
            onclick: move |_| {
                if let Some(hooks) = auth::hooks() {
                    (hooks.sign_in)();
                }
            },
            {t!("auth-sign-in")}
        }
    }
}

#[component]
pub fn SignUpButton() -> Element {
    rsx! {
        button {
            class: "navbar__auth-button navbar__auth-button--primary",
            onclick: move |_| {
                if let Some(hooks) = auth::hooks() {
                    (hooks.sign_up)();
                }
            },
            {t!("auth-sign-up")}
        }
    }
}

/// Account control for the signed-in state: avatar (image or initials)
/// plus display name, with a small menu holding the sign-out entry.
#[component]
pub fn UserButton() -> Element {
    let mut menu_open = use_signal(|| false);

    let profile = match SESSION() {
        SessionState::SignedIn(profile) => profile,
        // Outside a SignedIn boundary there is nothing to show.
        SessionState::SignedOut => return rsx! {},
    };

    let initials = profile.initials();

    rsx! {
        div { class: "navbar__user",
            button {
                class: "navbar__user-button",
                "aria-expanded": "{menu_open()}",
                aria_label: t!("auth-account"),
                onclick: move |_| menu_open.set(!menu_open()),
                if let Some(url) = profile.avatar_url.as_deref() {
                    img {
                        class: "navbar__user-avatar",
                        src: "{url}",
                        width: "32",
                        height: "32",
                        alt: "{profile.display_name}",
                    }
                } else {
                    span { class: "navbar__user-avatar navbar__user-avatar--initials",
                        "{initials}"
                    }
                }
                span { class: "navbar__user-name", "{profile.display_name}" }
            }
            if menu_open() {
                div { class: "navbar__user-menu",
                    if let Some(email) = profile.email.as_deref() {
                        span { class: "navbar__user-email", "{email}" }
                    }
                    button {
                        class: "navbar__user-signout",
                        onclick: move |_| {
                            menu_open.set(false);
                            if let Some(hooks) = auth::hooks() {
                                (hooks.sign_out)();
                            }
                        },
                        {t!("auth-sign-out")}
                    }
                }
            }
        }
    }
}
