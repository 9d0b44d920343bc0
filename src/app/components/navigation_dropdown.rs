use dioxus::prelude::*;

use crate::app::components::NavIconSvg;
use crate::config::DropdownConfig;
use crate::domain::models::{navigation_links, LinkEntry, NavIcon};
use crate::domain::services::{NavigationController, OpenSource};
use crate::shared::hooks::{use_outside_click, use_page_state};

pub const TRIGGER_ARIA_LABEL: &str = "Open Navigation Dropdown";

const ITEM_CLASS: &str = "c-nav-dropdown__item";
const HIGHLIGHTED_ITEM_CLASS: &str = "c-nav-dropdown__item c-nav-dropdown__item--highlighted";

/// Attributes of one rendered menu row
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemView {
    pub href: &'static str,
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
    pub class: &'static str,
    pub show_new_badge: bool,
}

impl MenuItemView {
    pub fn from_entry(entry: &LinkEntry) -> Self {
        let (target, rel) = if entry.is_external {
            (Some("_blank"), Some("noopener noreferrer"))
        } else {
            (None, None)
        };

        Self {
            href: entry.url,
            target,
            rel,
            class: if entry.is_highlighted {
                HIGHLIGHTED_ITEM_CLASS
            } else {
                ITEM_CLASS
            },
            show_new_badge: entry.is_new,
        }
    }
}

// The panel stays mounted; CSS drives visibility and pointer events from these classes
pub fn panel_class(open: bool) -> &'static str {
    if open {
        "c-nav-dropdown__panel is-open"
    } else {
        "c-nav-dropdown__panel"
    }
}

pub fn trigger_class(open: bool) -> &'static str {
    if open {
        "c-nav-dropdown__trigger is-open"
    } else {
        "c-nav-dropdown__trigger"
    }
}

pub fn aria_expanded(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}

/// "Explore" menu: opens on trigger hover/click, closes on outside
/// interaction and whenever the roadmaps dropdown opens.
#[component]
pub fn NavigationDropdown(#[props(default)] config: DropdownConfig) -> Element {
    let page = use_page_state();
    let roadmaps_open = page.roadmaps_open;
    let controller = NavigationController::new(page.navigation_open);

    use_outside_click(
        config.root_id.clone(),
        config.outside_events.clone(),
        move || controller.close_on_outside(),
    );

    // Re-runs on every roadmaps_open change
    use_effect(move || {
        controller.on_roadmaps_changed(roadmaps_open());
    });

    let is_open = (page.navigation_open)();
    let open_on_hover = config.open_on_hover;

    rsx! {
        div { id: "{config.root_id}", class: "c-nav-dropdown",
            button {
                class: trigger_class(is_open),
                aria_label: TRIGGER_ARIA_LABEL,
                aria_expanded: aria_expanded(is_open),
                onclick: move |_| controller.open(OpenSource::Click),
                onmouseover: move |_| controller.hover(open_on_hover),
                "{config.trigger_text}"
                NavIconSvg { icon: NavIcon::ChevronDown, class: "c-nav-dropdown__chevron" }
            }
            div { class: panel_class(is_open), role: "menu",
                for entry in navigation_links().iter() {
                    MenuItem { key: "{entry.url}", entry: *entry }
                }
            }
        }
    }
}

#[component]
fn MenuItem(entry: LinkEntry) -> Element {
    let view = MenuItemView::from_entry(&entry);

    rsx! {
        a {
            href: view.href,
            target: view.target,
            rel: view.rel,
            class: view.class,
            role: "menuitem",
            span { class: "c-nav-dropdown__icon",
                NavIconSvg { icon: entry.icon }
            }
            span { class: "c-nav-dropdown__text",
                span { class: "c-nav-dropdown__label",
                    "{entry.label} "
                    if view.show_new_badge {
                        span { class: "c-nav-dropdown__badge", "New" }
                    }
                }
                span { class: "c-nav-dropdown__description", "{entry.description}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::find_link;

    #[test]
    fn test_one_view_per_entry_in_order() {
        let hrefs: Vec<&str> = navigation_links()
            .iter()
            .map(|entry| MenuItemView::from_entry(entry).href)
            .collect();
        let urls: Vec<&str> = navigation_links().iter().map(|entry| entry.url).collect();
        assert_eq!(hrefs.len(), 8);
        assert_eq!(hrefs, urls);
    }

    #[test]
    fn test_external_entry_is_isolated() {
        let view = MenuItemView::from_entry(find_link("/videos").unwrap());
        assert_eq!(view.target, Some("_blank"));
        assert_eq!(view.rel, Some("noopener noreferrer"));
    }

    #[test]
    fn test_internal_entries_have_no_target_or_rel() {
        for entry in navigation_links().iter().filter(|e| !e.is_external) {
            let view = MenuItemView::from_entry(entry);
            assert_eq!(view.target, None, "{}", entry.label);
            assert_eq!(view.rel, None, "{}", entry.label);
        }
    }

    #[test]
    fn test_new_badge_only_on_new_entries() {
        let badges: Vec<&str> = navigation_links()
            .iter()
            .filter(|entry| MenuItemView::from_entry(entry).show_new_badge)
            .map(|entry| entry.label)
            .collect();
        assert_eq!(badges, vec!["Courses"]);
    }

    #[test]
    fn test_highlighted_entry_class() {
        let entry = LinkEntry::new("/x", "X", "", NavIcon::Menu).highlighted();
        assert_eq!(MenuItemView::from_entry(&entry).class, HIGHLIGHTED_ITEM_CLASS);
        let plain = MenuItemView::from_entry(&navigation_links()[0]);
        assert_eq!(plain.class, ITEM_CLASS);
    }

    #[test]
    fn test_open_state_classes() {
        assert_eq!(panel_class(false), "c-nav-dropdown__panel");
        assert!(panel_class(true).ends_with("is-open"));
        assert!(trigger_class(true).contains("is-open"));
        assert_eq!(aria_expanded(true), "true");
        assert_eq!(aria_expanded(false), "false");
    }
}
