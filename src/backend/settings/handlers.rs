/**
 * Admin Settings Handler
 *
 * `GET /api/admin/settings` returns what the administration form is
 * pre-filled with: every non-secret setting and whether the homeserver
 * connection is fully configured. Secret settings are never echoed.
 */

use std::collections::BTreeMap;

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::backend::settings::service::ConfigService;
use crate::shared::{ChatSettings, SettingKey};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminSettingsResponse {
    /// Non-secret settings keyed by storage name
    #[serde(flatten)]
    pub settings: BTreeMap<String, String>,
    pub configured: bool,
}

impl AdminSettingsResponse {
    pub fn from_settings(settings: &ChatSettings) -> Self {
        let visible = SettingKey::ALL
            .into_iter()
            .filter(|key| !key.is_secret())
            .map(|key| (key.as_str().to_string(), settings.get(key).to_string()))
            .collect();

        Self {
            settings: visible,
            configured: settings.is_matrix_configured(),
        }
    }
}

pub async fn get_admin_settings(
    State(config): State<ConfigService>,
    user: CurrentUser,
) -> Result<Json<AdminSettingsResponse>, BackendError> {
    user.require_admin()?;
    let settings = config.snapshot().await?;
    Ok(Json(AdminSettingsResponse::from_settings(&settings)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_secret_settings_are_omitted() {
        let mut settings = ChatSettings::default();
        settings.set(SettingKey::MatrixAppToken, "as_token");

        let value = serde_json::to_value(AdminSettingsResponse::from_settings(&settings)).unwrap();

        assert_eq!(
            value,
            json!({
                "matrix_server_url": "https://matrix.example.com",
                "matrix_server_name": "matrix.example.com",
                "element_call_url": "https://call.element.io",
                "identity_server_url": "https://vector.im",
                "element_web_url": "https://app.element.io",
                "configured": true
            })
        );
    }
}
