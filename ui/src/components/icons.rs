use dioxus::prelude::*;

/// Burger glyph for the mobile menu toggle (Lucide `menu`).
#[component]
pub fn MenuIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "28",
            height: "28",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            line { x1: "4", y1: "6", x2: "20", y2: "6" }
            line { x1: "4", y1: "12", x2: "20", y2: "12" }
            line { x1: "4", y1: "18", x2: "20", y2: "18" }
        }
    }
}

/// Close glyph for the open overlay (Lucide `x`).
#[component]
pub fn CloseIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "32",
            height: "32",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            line { x1: "18", y1: "6", x2: "6", y2: "18" }
            line { x1: "6", y1: "6", x2: "18", y2: "18" }
        }
    }
}
