//! Structured logging for the header navigation
//!
//! Every open-state transition and watcher lifecycle event goes through these
//! helpers so the fields stay consistent between the browser and native hosts.

use crate::shared::errors::AppError;

/// Operations reported in the `operation` field
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    DropdownOpen,
    DropdownClose,
    OutsideInteraction,
    SiblingCoordination,
    WatcherLifecycle,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::DropdownOpen => "dropdown_open",
            LogOperation::DropdownClose => "dropdown_close",
            LogOperation::OutsideInteraction => "outside_interaction",
            LogOperation::SiblingCoordination => "sibling_coordination",
            LogOperation::WatcherLifecycle => "watcher_lifecycle",
        }
    }
}

/// Log a trigger interaction opening the panel
pub fn log_dropdown_open(source: &str, was_open: bool) {
    tracing::debug!(
        operation = LogOperation::DropdownOpen.as_str(),
        source = source,
        was_open = was_open,
        "Navigation dropdown opened"
    );
}

/// Log the panel being closed
pub fn log_dropdown_close(reason: &str, was_open: bool) {
    tracing::debug!(
        operation = LogOperation::DropdownClose.as_str(),
        reason = reason,
        was_open = was_open,
        "Navigation dropdown closed"
    );
}

/// Log a pointer-down outside of a watched subtree
pub fn log_outside_interaction(root: &str) {
    tracing::trace!(
        operation = LogOperation::OutsideInteraction.as_str(),
        root = root,
        "Pointer interaction outside dropdown"
    );
}

/// Log the roadmaps dropdown forcing the navigation panel shut
pub fn log_sibling_coordination(roadmaps_open: bool, navigation_was_open: bool) {
    tracing::debug!(
        operation = LogOperation::SiblingCoordination.as_str(),
        roadmaps_open = roadmaps_open,
        navigation_was_open = navigation_was_open,
        "Roadmaps dropdown opened, closing navigation"
    );
}

/// Log an outside watcher being attached
pub fn log_watcher_attached(root: &str, event_count: usize) {
    tracing::debug!(
        operation = LogOperation::WatcherLifecycle.as_str(),
        root = root,
        event_count = event_count,
        "Outside interaction watcher attached"
    );
}

/// Log an outside watcher being released
pub fn log_watcher_detached(root: &str) {
    tracing::debug!(
        operation = LogOperation::WatcherLifecycle.as_str(),
        root = root,
        "Outside interaction watcher detached"
    );
}

/// Log a watcher that could not be attached; the dropdown keeps working
/// without outside-click closing
pub fn log_watcher_unavailable(root: &str, error: &AppError) {
    tracing::warn!(
        operation = LogOperation::WatcherLifecycle.as_str(),
        root = root,
        error = %error,
        "Outside interaction watcher unavailable"
    );
}

/// Log a listener that could not be removed when its watcher detached
pub fn log_watcher_detach_failed(event: &str, error: &str) {
    tracing::warn!(
        operation = LogOperation::WatcherLifecycle.as_str(),
        event = event,
        error = error,
        "Failed to remove outside interaction listener"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::DropdownOpen.as_str(), "dropdown_open");
        assert_eq!(LogOperation::DropdownClose.as_str(), "dropdown_close");
        assert_eq!(LogOperation::OutsideInteraction.as_str(), "outside_interaction");
        assert_eq!(LogOperation::SiblingCoordination.as_str(), "sibling_coordination");
        assert_eq!(LogOperation::WatcherLifecycle.as_str(), "watcher_lifecycle");
    }

    #[test]
    fn test_watcher_helpers_without_subscriber() {
        let err = AppError::Dom("document unavailable".to_string());
        log_watcher_unavailable("navigation-dropdown", &err);
        log_watcher_detach_failed("mousedown", "JsValue(TypeError)");
    }
}
