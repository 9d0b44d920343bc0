// Custom Dioxus hooks
pub mod use_outside_click;
pub mod use_page_state;

pub use use_outside_click::use_outside_click;
pub use use_page_state::{use_page_state, use_page_state_provider, PageState};
