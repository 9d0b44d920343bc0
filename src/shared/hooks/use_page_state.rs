use dioxus::prelude::*;

use crate::domain::services::OpenFlag;

/// Page-level dropdown flags, provided once by the page shell
#[derive(Clone, Copy, PartialEq)]
pub struct PageState {
    pub navigation_open: Signal<bool>,
    pub roadmaps_open: Signal<bool>,
}

/// Create the flags (both closed) and provide them to descendants
pub fn use_page_state_provider() -> PageState {
    use_context_provider(|| PageState {
        navigation_open: Signal::new(false),
        roadmaps_open: Signal::new(false),
    })
}

/// Flags provided by the nearest page shell
pub fn use_page_state() -> PageState {
    use_context::<PageState>()
}

// `peek` keeps event handlers and effects from subscribing to the flag they write
impl OpenFlag for Signal<bool> {
    fn is_open(&self) -> bool {
        *self.peek()
    }

    fn set_open(&self, open: bool) {
        let mut signal = *self;
        signal.set(open);
    }
}
