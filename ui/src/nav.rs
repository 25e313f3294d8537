//! Navigation model shared by the desktop link list and the mobile overlay.
//!
//! Two pieces live here:
//! - [`NavDestination`]: the five fixed destinations the navbar links to,
//!   in display order, each with its Fluent label key.
//! - [`MenuState`]: the mobile overlay's open/closed flag. The overlay is
//!   pure conditional styling; this type owns the flip logic so the
//!   state machine is testable without a renderer.

/// The navbar's destinations, in the order they render.
///
/// Platform crates own their `Route` enums, so `ui` only speaks in
/// destinations; a registered `NavBuilder` turns each one into a typed
/// `Link` (see `components::app_navbar`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDestination {
    Home,
    Modules,
    Topics,
    Analytics,
    Chat,
}

impl NavDestination {
    /// Display order. The navbar iterates this for both the desktop
    /// list and the mobile overlay.
    pub const ALL: [NavDestination; 5] = [
        NavDestination::Home,
        NavDestination::Modules,
        NavDestination::Topics,
        NavDestination::Analytics,
        NavDestination::Chat,
    ];

    /// Fluent message id for the destination's localized label.
    pub fn label_key(self) -> &'static str {
        match self {
            NavDestination::Home => "nav-home",
            NavDestination::Modules => "nav-modules",
            NavDestination::Topics => "nav-topics",
            NavDestination::Analytics => "nav-analytics",
            NavDestination::Chat => "nav-chat",
        }
    }
}

/// Open/closed flag for the mobile overlay menu.
///
/// Defaults to closed on every mount; nothing persists it. The burger
/// glyph toggles, the close glyph toggles, and every overlay link click
/// closes on its way out so navigation never leaves the overlay up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the overlay. Wired to both the burger and the close glyph.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Force-close. Idempotent; wired to overlay link clicks.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Overlay class string for the current state. Visibility is a pure
    /// class flip; the stylesheet does the hiding.
    pub fn overlay_class(self) -> &'static str {
        if self.open {
            "navbar__overlay navbar__overlay--open"
        } else {
            "navbar__overlay"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn burger_toggle_opens_then_close_control_shuts() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.is_open());
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn link_click_closes_and_stays_closed() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        // A second close (e.g. a double-tapped link) is a no-op.
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn overlay_class_follows_state() {
        let mut menu = MenuState::default();
        assert_eq!(menu.overlay_class(), "navbar__overlay");
        menu.toggle();
        assert_eq!(menu.overlay_class(), "navbar__overlay navbar__overlay--open");
    }

    #[test]
    fn five_destinations_in_fixed_order() {
        use NavDestination::*;
        assert_eq!(NavDestination::ALL, [Home, Modules, Topics, Analytics, Chat]);
    }

    #[test]
    fn label_keys_are_distinct() {
        let mut keys: Vec<_> = NavDestination::ALL.iter().map(|d| d.label_key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), NavDestination::ALL.len());
    }
}
