use dioxus::prelude::*;

use crate::components::{SignedIn, SignedOut};

/// Progress dashboard. The charts themselves arrive with the data layer;
/// until then the page only gates its placeholder on the session.
#[component]
pub fn Analytics() -> Element {
    rsx! {
        section { class: "page page-analytics",
            h1 { {crate::t!("analytics-title")} }
            SignedIn {
                p { {crate::t!("analytics-intro")} }
            }
            SignedOut {
                p { {crate::t!("analytics-signed-out")} }
            }
        }
    }
}
