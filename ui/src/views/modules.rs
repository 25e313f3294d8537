use dioxus::prelude::*;

#[component]
pub fn Modules() -> Element {
    rsx! {
        section { class: "page page-modules",
            h1 { {crate::t!("modules-title")} }
            p { {crate::t!("modules-intro")} }
        }
    }
}
