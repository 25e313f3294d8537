//! Visitor session state and the seam to the external identity provider.
//!
//! The navbar never authenticates anybody. It pattern-matches on
//! [`SessionState`] (a two-variant tagged union) to decide which control
//! cluster to show, and forwards sign-in/up/out clicks to hooks the
//! platform registered. Where those hooks go (hosted identity SDK,
//! OAuth redirect, a local stub) is the platform's business.
//!
//! Platforms push session snapshots into [`SESSION`]; every component
//! that reads it re-renders on change.

use dioxus::prelude::*;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

/// Profile of a signed-in visitor, as reported by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl UserProfile {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            email: None,
            avatar_url: None,
        }
    }

    /// Fallback avatar glyph: first letter of up to the first two words.
    pub fn initials(&self) -> String {
        self.display_name
            .split_whitespace()
            .take(2)
            .filter_map(|word| word.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// The two mutually exclusive visitor states the navbar renders against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    SignedOut,
    SignedIn(UserProfile),
}

impl SessionState {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, SessionState::SignedIn(_))
    }
}

/// Current visitor session. Starts signed out; the platform's identity
/// glue writes snapshots here.
pub static SESSION: GlobalSignal<SessionState> = Signal::global(SessionState::default);

/// Platform-supplied triggers for the auth controls.
///
/// Registered once at startup, same contract as the nav builder: if no
/// hooks are registered the controls still render, clicks just do
/// nothing (keeps `ui` previewable without platform glue).
pub struct AuthHooks {
    pub sign_in: fn(),
    pub sign_up: fn(),
    pub sign_out: fn(),
}

static AUTH_HOOKS: OnceCell<AuthHooks> = OnceCell::new();

pub fn register_auth(hooks: AuthHooks) {
    let _ = AUTH_HOOKS.set(hooks);
}

pub(crate) fn hooks() -> Option<&'static AuthHooks> {
    AUTH_HOOKS.get()
}
