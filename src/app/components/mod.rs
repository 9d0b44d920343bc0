pub mod nav_icon;
pub mod navigation_dropdown;
pub mod roadmaps_dropdown;

pub use nav_icon::NavIconSvg;
pub use navigation_dropdown::{
    aria_expanded, panel_class, trigger_class, MenuItemView, NavigationDropdown, TRIGGER_ARIA_LABEL,
};
pub use roadmaps_dropdown::RoadmapsDropdown;
