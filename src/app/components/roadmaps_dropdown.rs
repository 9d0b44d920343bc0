use dioxus::prelude::*;

use crate::app::components::navigation_dropdown::{aria_expanded, panel_class, trigger_class};
use crate::app::components::NavIconSvg;
use crate::domain::models::NavIcon;
use crate::shared::hooks::{use_outside_click, use_page_state};
use crate::shared::outside_click::DEFAULT_OUTSIDE_EVENTS;

const ROOT_ID: &str = "roadmaps-dropdown";

/// Sibling header dropdown. Owns `roadmaps_open`; opening it closes the
/// navigation dropdown through that component's own effect.
#[component]
pub fn RoadmapsDropdown() -> Element {
    let page = use_page_state();
    let mut roadmaps_open = page.roadmaps_open;

    use_outside_click(
        ROOT_ID.to_string(),
        DEFAULT_OUTSIDE_EVENTS.iter().map(|e| e.to_string()).collect(),
        move || {
            let mut roadmaps_open = roadmaps_open;
            if *roadmaps_open.peek() {
                roadmaps_open.set(false);
            }
        },
    );

    let is_open = (page.roadmaps_open)();

    rsx! {
        div { id: ROOT_ID, class: "c-nav-dropdown",
            button {
                class: trigger_class(is_open),
                aria_label: "Open Roadmaps Dropdown",
                aria_expanded: aria_expanded(is_open),
                onclick: move |_| {
                    tracing::debug!(roadmaps_open = !is_open, "Roadmaps dropdown toggled");
                    roadmaps_open.set(!is_open);
                },
                "Roadmaps"
                NavIconSvg { icon: NavIcon::ChevronDown, class: "c-nav-dropdown__chevron" }
            }
            div {
                class: panel_class(is_open),
                role: "menu",
                a { class: "c-nav-dropdown__item", href: "/roadmaps", role: "menuitem",
                    span { class: "c-nav-dropdown__icon",
                        NavIconSvg { icon: NavIcon::Menu }
                    }
                    span { class: "c-nav-dropdown__text",
                        span { class: "c-nav-dropdown__label", "All Roadmaps" }
                        span { class: "c-nav-dropdown__description", "Browse every roadmap" }
                    }
                }
            }
        }
    }
}
