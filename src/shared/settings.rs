//! Bridge Settings
//!
//! The six string settings the bridge keeps under one configuration
//! namespace, their fixed defaults, and the snapshot/update shapes used by
//! the rest of the crate.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Configuration namespace every setting is stored under
pub const APP_NAMESPACE: &str = "chat_bridge";

/// One of the six stored settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Base URL of the Matrix homeserver
    MatrixServerUrl,
    /// Server name used in Matrix user ids (`@uid:<name>`)
    MatrixServerName,
    /// Element Call base URL
    ElementCallUrl,
    /// Identity server base URL
    IdentityServerUrl,
    /// Element web client URL
    ElementWebUrl,
    /// Application service token for server-to-server calls
    MatrixAppToken,
}

impl SettingKey {
    /// Every key, in storage order
    pub const ALL: [SettingKey; 6] = [
        SettingKey::MatrixServerUrl,
        SettingKey::MatrixServerName,
        SettingKey::ElementCallUrl,
        SettingKey::IdentityServerUrl,
        SettingKey::ElementWebUrl,
        SettingKey::MatrixAppToken,
    ];

    /// Storage key name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MatrixServerUrl => "matrix_server_url",
            Self::MatrixServerName => "matrix_server_name",
            Self::ElementCallUrl => "element_call_url",
            Self::IdentityServerUrl => "identity_server_url",
            Self::ElementWebUrl => "element_web_url",
            Self::MatrixAppToken => "matrix_app_token",
        }
    }

    /// Value returned when the setting is unset or empty
    pub fn default_value(&self) -> &'static str {
        match self {
            Self::MatrixServerUrl => "https://matrix.example.com",
            Self::MatrixServerName => "matrix.example.com",
            Self::ElementCallUrl => "https://call.element.io",
            Self::IdentityServerUrl => "https://vector.im",
            Self::ElementWebUrl => "https://app.element.io",
            Self::MatrixAppToken => "",
        }
    }

    /// Secrets are never echoed back to clients
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::MatrixAppToken)
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time copy of all six settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatSettings {
    pub matrix_server_url: String,
    pub matrix_server_name: String,
    pub element_call_url: String,
    pub identity_server_url: String,
    pub element_web_url: String,
    pub matrix_app_token: String,
}

impl ChatSettings {
    /// Value of a single setting
    pub fn get(&self, key: SettingKey) -> &str {
        match key {
            SettingKey::MatrixServerUrl => &self.matrix_server_url,
            SettingKey::MatrixServerName => &self.matrix_server_name,
            SettingKey::ElementCallUrl => &self.element_call_url,
            SettingKey::IdentityServerUrl => &self.identity_server_url,
            SettingKey::ElementWebUrl => &self.element_web_url,
            SettingKey::MatrixAppToken => &self.matrix_app_token,
        }
    }

    /// Replace a single setting
    pub fn set(&mut self, key: SettingKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            SettingKey::MatrixServerUrl => self.matrix_server_url = value,
            SettingKey::MatrixServerName => self.matrix_server_name = value,
            SettingKey::ElementCallUrl => self.element_call_url = value,
            SettingKey::IdentityServerUrl => self.identity_server_url = value,
            SettingKey::ElementWebUrl => self.element_web_url = value,
            SettingKey::MatrixAppToken => self.matrix_app_token = value,
        }
    }

    /// True when the homeserver can be reached as an application service
    pub fn is_matrix_configured(&self) -> bool {
        !self.matrix_server_url.is_empty()
            && !self.matrix_server_name.is_empty()
            && !self.matrix_app_token.is_empty()
    }
}

impl Default for ChatSettings {
    fn default() -> Self {
        let mut settings = Self {
            matrix_server_url: String::new(),
            matrix_server_name: String::new(),
            element_call_url: String::new(),
            identity_server_url: String::new(),
            element_web_url: String::new(),
            matrix_app_token: String::new(),
        };
        for key in SettingKey::ALL {
            settings.set(key, key.default_value());
        }
        settings
    }
}

/// Partial settings write
///
/// Every present field is stored verbatim; unknown keys and `null` values
/// are rejected when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsUpdate {
    #[serde(default, deserialize_with = "present_string", skip_serializing_if = "Option::is_none")]
    pub matrix_server_url: Option<String>,
    #[serde(default, deserialize_with = "present_string", skip_serializing_if = "Option::is_none")]
    pub matrix_server_name: Option<String>,
    #[serde(default, deserialize_with = "present_string", skip_serializing_if = "Option::is_none")]
    pub element_call_url: Option<String>,
    #[serde(default, deserialize_with = "present_string", skip_serializing_if = "Option::is_none")]
    pub identity_server_url: Option<String>,
    #[serde(default, deserialize_with = "present_string", skip_serializing_if = "Option::is_none")]
    pub element_web_url: Option<String>,
    #[serde(default, deserialize_with = "present_string", skip_serializing_if = "Option::is_none")]
    pub matrix_app_token: Option<String>,
}

/// A field that is present must hold a string
fn present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl SettingsUpdate {
    /// Present fields as (key, value) pairs
    pub fn entries(&self) -> Vec<(SettingKey, &str)> {
        [
            (SettingKey::MatrixServerUrl, &self.matrix_server_url),
            (SettingKey::MatrixServerName, &self.matrix_server_name),
            (SettingKey::ElementCallUrl, &self.element_call_url),
            (SettingKey::IdentityServerUrl, &self.identity_server_url),
            (SettingKey::ElementWebUrl, &self.element_web_url),
            (SettingKey::MatrixAppToken, &self.matrix_app_token),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_app_token_is_secret() {
        let secrets: Vec<_> = SettingKey::ALL.into_iter().filter(|k| k.is_secret()).collect();
        assert_eq!(secrets, vec![SettingKey::MatrixAppToken]);
    }

    #[test]
    fn test_default_snapshot_uses_key_defaults() {
        let settings = ChatSettings::default();
        for key in SettingKey::ALL {
            assert_eq!(settings.get(key), key.default_value());
        }
        assert_eq!(settings.matrix_server_url, "https://matrix.example.com");
        assert_eq!(settings.matrix_app_token, "");
    }

    #[test]
    fn test_is_matrix_configured_requires_token() {
        let mut settings = ChatSettings::default();
        assert!(!settings.is_matrix_configured());

        settings.set(SettingKey::MatrixAppToken, "as_token");
        assert!(settings.is_matrix_configured());

        settings.set(SettingKey::MatrixServerName, "");
        assert!(!settings.is_matrix_configured());
    }

    #[test]
    fn test_update_entries_skip_missing_fields() {
        let update: SettingsUpdate = serde_json::from_str(
            r#"{"matrix_server_url": "https://hs.example.org", "matrix_app_token": ""}"#,
        )
        .unwrap();

        assert_eq!(
            update.entries(),
            vec![
                (SettingKey::MatrixServerUrl, "https://hs.example.org"),
                (SettingKey::MatrixAppToken, ""),
            ]
        );
        assert!(SettingsUpdate::default().entries().is_empty());
    }

    #[test]
    fn test_update_rejects_unknown_keys() {
        let result: Result<SettingsUpdate, _> =
            serde_json::from_str(r#"{"brand": "Other"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_rejects_null_values() {
        let result: Result<SettingsUpdate, _> =
            serde_json::from_str(r#"{"matrix_server_url": null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_rejects_non_string_values() {
        let result: Result<SettingsUpdate, _> =
            serde_json::from_str(r#"{"matrix_server_url": 42}"#);
        assert!(result.is_err());
    }
}
