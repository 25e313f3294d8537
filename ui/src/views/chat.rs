use dioxus::prelude::*;

#[component]
pub fn Chat() -> Element {
    rsx! {
        section { class: "page page-chat",
            h1 { {crate::t!("chat-title")} }
            p { {crate::t!("chat-intro")} }
        }
    }
}
