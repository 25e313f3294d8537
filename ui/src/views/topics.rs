use dioxus::prelude::*;

#[component]
pub fn Topics() -> Element {
    rsx! {
        section { class: "page page-topics",
            h1 { {crate::t!("topics-title")} }
            p { {crate::t!("topics-intro")} }
        }
    }
}
