//! Inline SVG icons for the nav bar.

use dioxus::prelude::*;

use crate::routes::NavIcon;

/// Outline icon drawn with `currentColor`.
#[component]
pub fn Icon(icon: NavIcon, #[props(default = "w-4 h-4")] class: &'static str) -> Element {
    rsx! {
        svg {
            class,
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon.paths().iter() {
                path { key: "{d}", d: *d }
            }
        }
    }
}
