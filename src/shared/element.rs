/**
 * Element Client Configuration
 *
 * This module defines the configuration object consumed by the Element web
 * client and the combined payload returned by `/api/config`.
 *
 * Both are built from a `ChatSettings` snapshot by pure functions: field
 * values are substituted directly, everything else is a fixed label or
 * feature flag.
 */
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::settings::ChatSettings;

/// Brand shown by the Element web client
pub const CLIENT_BRAND: &str = "Nextcloud Chat";

/// Brand shown by Element Call
pub const CALL_BRAND: &str = "Element Call";

/// Element web client `config.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementConfig {
    pub default_server_config: DefaultServerConfig,
    pub disable_custom_urls: bool,
    pub disable_guests: bool,
    pub disable_login_language_selector: bool,
    pub disable_3pid_login: bool,
    pub brand: String,
    pub integrations_ui_url: String,
    pub integrations_rest_url: String,
    pub integrations_widgets_urls: Vec<String>,
    pub bug_report_endpoint_url: String,
    pub default_country_code: String,
    pub show_labs_settings: bool,
    pub features: BTreeMap<String, String>,
    pub default_federate: bool,
    pub default_theme: String,
    pub room_directory: RoomDirectory,
    pub enable_presence_by_hs_url: BTreeMap<String, bool>,
    pub setting_defaults: SettingDefaults,
    pub jitsi: JitsiConfig,
    pub element_call: ElementCallConfig,
    pub map_style_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultServerConfig {
    #[serde(rename = "m.homeserver")]
    pub homeserver: HomeserverConfig,
    #[serde(rename = "m.identity_server")]
    pub identity_server: IdentityServerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomeserverConfig {
    pub base_url: String,
    pub server_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityServerConfig {
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomDirectory {
    pub servers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDefaults {
    pub breadcrumbs: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JitsiConfig {
    pub preferred_domain: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementCallConfig {
    pub url: String,
    pub use_exclusively: bool,
    pub participant_limit: u32,
    pub brand: String,
}

impl ElementConfig {
    /// Build the client configuration from the current settings
    pub fn from_settings(settings: &ChatSettings) -> Self {
        let base_url = settings.matrix_server_url.clone();
        let server_name = settings.matrix_server_name.clone();

        let features = [
            ("feature_pinning", "labs"),
            ("feature_custom_status", "enable"),
            ("feature_custom_tags", "enable"),
            ("feature_state_counters", "enable"),
        ]
        .into_iter()
        .map(|(name, mode)| (name.to_string(), mode.to_string()))
        .collect();

        Self {
            default_server_config: DefaultServerConfig {
                homeserver: HomeserverConfig {
                    base_url: base_url.clone(),
                    server_name: server_name.clone(),
                },
                identity_server: IdentityServerConfig {
                    base_url: settings.identity_server_url.clone(),
                },
            },
            disable_custom_urls: false,
            disable_guests: true,
            disable_login_language_selector: false,
            disable_3pid_login: false,
            brand: CLIENT_BRAND.to_string(),
            integrations_ui_url: String::new(),
            integrations_rest_url: String::new(),
            integrations_widgets_urls: Vec::new(),
            bug_report_endpoint_url: String::new(),
            default_country_code: "US".to_string(),
            show_labs_settings: true,
            features,
            default_federate: true,
            default_theme: "auto".to_string(),
            room_directory: RoomDirectory {
                servers: vec![server_name],
            },
            enable_presence_by_hs_url: BTreeMap::from([(base_url, true)]),
            setting_defaults: SettingDefaults { breadcrumbs: true },
            jitsi: JitsiConfig {
                preferred_domain: "meet.element.io".to_string(),
            },
            element_call: ElementCallConfig {
                url: settings.element_call_url.clone(),
                use_exclusively: false,
                participant_limit: 8,
                brand: CALL_BRAND.to_string(),
            },
            map_style_url: "https://api.maptiler.com/maps/streets/style.json?key=YOUR_API_KEY"
                .to_string(),
        }
    }
}

/// Feature flags advertised alongside the client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeFeatures {
    pub element_call: bool,
    pub federation: bool,
    pub e2e_encryption: bool,
}

impl Default for BridgeFeatures {
    fn default() -> Self {
        Self {
            element_call: true,
            federation: true,
            e2e_encryption: true,
        }
    }
}

/// Combined payload served by `/api/config` and `/api/matrix/config`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub element_config: ElementConfig,
    pub matrix_server: String,
    pub features: BridgeFeatures,
}

impl ClientConfig {
    pub fn from_settings(settings: &ChatSettings) -> Self {
        Self {
            element_config: ElementConfig::from_settings(settings),
            matrix_server: settings.matrix_server_url.clone(),
            features: BridgeFeatures::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::settings::SettingKey;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample_settings() -> ChatSettings {
        let mut settings = ChatSettings::default();
        settings.set(SettingKey::MatrixServerUrl, "https://hs.example.org");
        settings.set(SettingKey::MatrixServerName, "example.org");
        settings.set(SettingKey::ElementCallUrl, "https://call.example.org");
        settings.set(SettingKey::IdentityServerUrl, "https://id.example.org");
        settings
    }

    #[test]
    fn test_element_config_wire_format() {
        let config = ElementConfig::from_settings(&sample_settings());
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(
            value,
            json!({
                "default_server_config": {
                    "m.homeserver": {
                        "base_url": "https://hs.example.org",
                        "server_name": "example.org"
                    },
                    "m.identity_server": {
                        "base_url": "https://id.example.org"
                    }
                },
                "disable_custom_urls": false,
                "disable_guests": true,
                "disable_login_language_selector": false,
                "disable_3pid_login": false,
                "brand": "Nextcloud Chat",
                "integrations_ui_url": "",
                "integrations_rest_url": "",
                "integrations_widgets_urls": [],
                "bug_report_endpoint_url": "",
                "default_country_code": "US",
                "show_labs_settings": true,
                "features": {
                    "feature_pinning": "labs",
                    "feature_custom_status": "enable",
                    "feature_custom_tags": "enable",
                    "feature_state_counters": "enable"
                },
                "default_federate": true,
                "default_theme": "auto",
                "room_directory": { "servers": ["example.org"] },
                "enable_presence_by_hs_url": { "https://hs.example.org": true },
                "setting_defaults": { "breadcrumbs": true },
                "jitsi": { "preferred_domain": "meet.element.io" },
                "element_call": {
                    "url": "https://call.example.org",
                    "use_exclusively": false,
                    "participant_limit": 8,
                    "brand": "Element Call"
                },
                "map_style_url": "https://api.maptiler.com/maps/streets/style.json?key=YOUR_API_KEY"
            })
        );
    }

    #[test]
    fn test_element_config_is_deterministic() {
        let settings = sample_settings();
        assert_eq!(
            ElementConfig::from_settings(&settings),
            ElementConfig::from_settings(&settings)
        );
    }

    #[test]
    fn test_client_config_wraps_element_config() {
        let settings = sample_settings();
        let value = serde_json::to_value(ClientConfig::from_settings(&settings)).unwrap();

        assert_eq!(value["matrix_server"], "https://hs.example.org");
        assert_eq!(
            value["features"],
            json!({ "element_call": true, "federation": true, "e2e_encryption": true })
        );
        assert_eq!(
            value["element_config"]["default_server_config"]["m.homeserver"]["server_name"],
            "example.org"
        );
    }
}
