pub mod icon;
pub mod link_entry;

pub use icon::NavIcon;
pub use link_entry::{find_link, navigation_links, LinkEntry, NAVIGATION_LINKS};
