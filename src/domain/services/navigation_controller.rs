//! Open-state rules for the navigation dropdown
//!
//! The controller only knows how to flip the navigation flag. The flag itself
//! lives with the page shell: a Dioxus `Signal<bool>` in the app, or a
//! `StateCell<bool>` for framework-free hosts and tests.

use std::rc::Rc;

use crate::shared::errors::Result;
use crate::shared::logging;
use crate::shared::outside_click::{OutsideInteractionWatcher, WatchGuard};
use crate::shared::state::{HeaderFlags, StateCell, Subscription};

/// A writable boolean flag
pub trait OpenFlag {
    fn is_open(&self) -> bool;
    fn set_open(&self, open: bool);
}

impl OpenFlag for StateCell<bool> {
    fn is_open(&self) -> bool {
        self.get()
    }

    fn set_open(&self, open: bool) {
        self.set(open);
    }
}

/// Trigger interaction that opened the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenSource {
    Hover,
    Click,
}

impl OpenSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpenSource::Hover => "hover",
            OpenSource::Click => "click",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationController<F> {
    navigation_open: F,
}

impl<F: OpenFlag> NavigationController<F> {
    pub fn new(navigation_open: F) -> Self {
        Self { navigation_open }
    }

    pub fn is_open(&self) -> bool {
        self.navigation_open.is_open()
    }

    /// Trigger hovered or clicked. Idempotent.
    pub fn open(&self, source: OpenSource) {
        let was_open = self.navigation_open.is_open();
        if !was_open {
            self.navigation_open.set_open(true);
        }
        logging::log_dropdown_open(source.as_str(), was_open);
    }

    /// Pointer moved over the trigger. Opens only when hover-opening is
    /// enabled for this dropdown.
    pub fn hover(&self, open_on_hover: bool) {
        if open_on_hover {
            self.open(OpenSource::Hover);
        }
    }

    /// Pointer interaction outside the dropdown. Closes regardless of the
    /// previous state.
    pub fn close_on_outside(&self) {
        let was_open = self.navigation_open.is_open();
        if was_open {
            self.navigation_open.set_open(false);
        }
        logging::log_dropdown_close("outside_interaction", was_open);
    }

    /// Observed value of the sibling roadmaps flag
    pub fn on_roadmaps_changed(&self, roadmaps_open: bool) {
        if !roadmaps_open {
            return;
        }
        let was_open = self.navigation_open.is_open();
        if was_open {
            self.navigation_open.set_open(false);
        }
        logging::log_sibling_coordination(roadmaps_open, was_open);
    }
}

impl NavigationController<StateCell<bool>> {
    /// Wire the controller to the page flags and an outside watcher. Both
    /// registrations are released when the returned handle drops.
    pub fn mount<W: OutsideInteractionWatcher>(
        flags: &HeaderFlags,
        watcher: &W,
        root: &W::Root,
    ) -> Result<MountedNavigation> {
        let controller = NavigationController::new(flags.navigation_open.clone());

        let outside = {
            let controller = controller.clone();
            watcher.attach(root, Rc::new(move || controller.close_on_outside()))?
        };

        let roadmaps = {
            let controller = controller.clone();
            flags
                .roadmaps_open
                .subscribe(move |open| controller.on_roadmaps_changed(*open))
        };

        // Roadmaps may already be open at mount time
        controller.on_roadmaps_changed(flags.roadmaps_open.get());

        Ok(MountedNavigation {
            controller,
            _roadmaps: roadmaps,
            _outside: outside,
        })
    }
}

/// A mounted navigation dropdown; dropping it tears down its subscriptions
pub struct MountedNavigation {
    controller: NavigationController<StateCell<bool>>,
    _roadmaps: Subscription,
    _outside: WatchGuard,
}

impl MountedNavigation {
    pub fn controller(&self) -> &NavigationController<StateCell<bool>> {
        &self.controller
    }

    pub fn unmount(self) {
        drop(self);
    }
}
