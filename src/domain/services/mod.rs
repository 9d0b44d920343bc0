pub mod navigation_controller;

pub use navigation_controller::{MountedNavigation, NavigationController, OpenFlag, OpenSource};
