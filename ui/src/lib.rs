//! Shared UI crate for CS Prime. Cross-platform components and views live here.

pub mod auth;
pub mod i18n;
pub mod nav;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    // Visitor-session boundaries and auth trigger controls
    pub mod auth_controls;
    pub use auth_controls::{SignInButton, SignUpButton, SignedIn, SignedOut, UserButton};

    // Menu glyphs (burger / close)
    pub mod icons;
    pub use icons::{CloseIcon, MenuIcon};
}
