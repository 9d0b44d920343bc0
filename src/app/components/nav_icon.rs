use dioxus::prelude::*;

use crate::domain::models::NavIcon;

/// Inline SVG glyph; inherits its colour from the surrounding text
#[component]
pub fn NavIconSvg(icon: NavIcon, #[props(default)] class: String) -> Element {
    rsx! {
        svg {
            class: "{class}",
            "data-icon": icon.name(),
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            for d in icon.svg_paths().iter() {
                path { d: *d }
            }
        }
    }
}
