use dioxus::prelude::*;

use crate::app::components::{NavigationDropdown, RoadmapsDropdown};

#[component]
pub fn Header() -> Element {
    rsx! {
        header { class: "c-header",
            a { class: "c-header__logo", href: "/", "roadmap.sh" }
            nav { class: "c-header__nav",
                NavigationDropdown {}
                RoadmapsDropdown {}
            }
        }
    }
}
