use serde::{Deserialize, Serialize};

use super::platform::Platform;

/// User preferences persisted alongside the post sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_platform: Option<Platform>,
    pub auto_save: bool,
    pub notifications: bool,
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            default_platform: None,
            auto_save: true,
            notifications: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let prefs = UserPreferences::default();
        assert!(prefs.auto_save);
        assert!(prefs.notifications);
        assert_eq!(prefs.default_platform, None);
    }

    #[test]
    fn test_wire_shape() {
        let prefs = UserPreferences {
            default_platform: Some(Platform::Twitter),
            auto_save: false,
            notifications: true,
        };
        let value = serde_json::to_value(&prefs).unwrap();

        assert_eq!(value["defaultPlatform"], "twitter");
        assert_eq!(value["autoSave"], false);
        assert_eq!(value["notifications"], true);
    }
}
