//! Dropdown configuration
//!
//! Hosts may pass a `DropdownConfig` to `NavigationDropdown`; every field has
//! a default so partial JSON documents are accepted.

use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, Result};
use crate::shared::outside_click::DEFAULT_OUTSIDE_EVENTS;

pub const DEFAULT_ROOT_ID: &str = "navigation-dropdown";
pub const DEFAULT_TRIGGER_TEXT: &str = "Explore";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    /// Element id of the dropdown root, used to scope outside-click detection
    pub root_id: String,
    pub trigger_text: String,
    /// DOM events treated as an outside interaction
    pub outside_events: Vec<String>,
    pub open_on_hover: bool,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            root_id: DEFAULT_ROOT_ID.to_string(),
            trigger_text: DEFAULT_TRIGGER_TEXT.to_string(),
            outside_events: DEFAULT_OUTSIDE_EVENTS.iter().map(|e| e.to_string()).collect(),
            open_on_hover: true,
        }
    }
}

impl DropdownConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: DropdownConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.root_id.trim().is_empty() {
            return Err(AppError::Config("root_id must not be empty".to_string()));
        }
        if self.root_id.chars().any(char::is_whitespace) {
            return Err(AppError::Config(format!(
                "root_id '{}' must not contain whitespace",
                self.root_id
            )));
        }
        if self.outside_events.is_empty() {
            return Err(AppError::Config(
                "at least one outside event is required".to_string(),
            ));
        }
        if let Some(event) = self.outside_events.iter().find(|e| e.trim().is_empty()) {
            return Err(AppError::Config(format!("invalid outside event '{}'", event)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DropdownConfig::default();
        assert_eq!(config.root_id, "navigation-dropdown");
        assert_eq!(config.trigger_text, "Explore");
        assert_eq!(config.outside_events, vec!["mousedown", "touchstart"]);
        assert!(config.open_on_hover);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = DropdownConfig::from_json(r#"{"trigger_text": "Browse"}"#).unwrap();
        assert_eq!(config.trigger_text, "Browse");
        assert_eq!(config.root_id, DEFAULT_ROOT_ID);
        assert!(config.open_on_hover);
    }

    #[test]
    fn test_rejects_empty_root_id() {
        let err = DropdownConfig::from_json(r#"{"root_id": "  "}"#).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_rejects_missing_events() {
        let err = DropdownConfig::from_json(r#"{"outside_events": []}"#).unwrap_err();
        assert!(err.to_string().contains("outside event"));
    }

    #[test]
    fn test_malformed_json() {
        let err = DropdownConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, AppError::Serialization(_)));
    }
}
