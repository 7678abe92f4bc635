//! User records returned by the authentication endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{PromptCategory, ResponseStyle};

/// Roles offered during registration. The backend stores the role as free
/// text, so this list only drives interactive selection.
pub const USER_ROLES: [&str; 9] = [
    "student",
    "educator",
    "researcher",
    "developer",
    "designer",
    "writer",
    "marketer",
    "entrepreneur",
    "other",
];

/// Per-user builder preferences. Field names are camelCase on the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Category preselected for new drafts.
    #[serde(rename = "defaultCategory", skip_serializing_if = "Option::is_none")]
    pub default_category: Option<PromptCategory>,
    /// Style preselected for new drafts.
    #[serde(rename = "defaultStyle", skip_serializing_if = "Option::is_none")]
    pub default_style: Option<ResponseStyle>,
    /// UI theme, kept for parity with the web client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// User record returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub preferences: Preferences,
}

/// Partial profile update sent to `PATCH /auth/profile/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
}

impl ProfilePatch {
    /// True when the patch carries no changes.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.role.is_none() && self.preferences.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferences_roundtrip_camel_case() {
        let prefs = Preferences {
            default_category: Some(PromptCategory::DeepResearch),
            default_style: Some(ResponseStyle::Technical),
            theme: None,
        };
        let json = serde_json::to_string(&prefs).unwrap();
        assert!(json.contains("\"defaultCategory\":\"deep_research\""));
        assert!(json.contains("\"defaultStyle\":\"technical\""));
        assert!(!json.contains("theme"));

        let parsed: Preferences = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn profile_tolerates_missing_preferences() {
        let profile: UserProfile = serde_json::from_str(
            r#"{"id": 7, "username": "ada", "email": "ada@example.com", "role": "developer"}"#,
        )
        .unwrap();
        assert_eq!(profile.preferences, Preferences::default());
        assert!(profile.created_at.is_none());
    }

    #[test]
    fn empty_patch_serializes_to_empty_object() {
        let patch = ProfilePatch::default();
        assert!(patch.is_empty());
        assert_eq!(serde_json::to_string(&patch).unwrap(), "{}");
    }
}
