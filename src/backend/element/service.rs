/**
 * Element Service
 *
 * Serves the Element web client configuration and builds Element Call
 * join URLs. Neither touches the homeserver.
 */

use reqwest::Url;
use url::form_urlencoded;

use crate::backend::error::BackendError;
use crate::backend::matrix::error::MatrixError;
use crate::backend::settings::{ConfigService, StorageError};
use crate::shared::{ClientConfig, ElementConfig, SettingsUpdate};

#[derive(Clone)]
pub struct ElementService {
    config: ConfigService,
}

impl ElementService {
    pub fn new(config: ConfigService) -> Self {
        Self { config }
    }

    /// Element `config.json` for the current settings
    pub async fn element_config(&self) -> Result<ElementConfig, StorageError> {
        let settings = self.config.snapshot().await?;
        Ok(ElementConfig::from_settings(&settings))
    }

    /// Element config plus homeserver URL and feature flags
    pub async fn client_config(&self) -> Result<ClientConfig, StorageError> {
        let settings = self.config.snapshot().await?;
        Ok(ClientConfig::from_settings(&settings))
    }

    /// Store the settings the client configuration is built from
    pub async fn update_element_config(&self, update: &SettingsUpdate) -> Result<(), StorageError> {
        self.config.apply(update).await?;
        tracing::info!("Element configuration updated ({} settings)", update.entries().len());
        Ok(())
    }

    /// Element Call URL for a room: `{element_call_url}/room#?roomId={room_id}`
    pub async fn start_call(&self, room_id: &str) -> Result<String, BackendError> {
        let base = self.config.element_call_url().await?;
        let call_url = call_url(&base, room_id)?;
        tracing::info!("Call started in {}", room_id);
        Ok(call_url)
    }

    /// Calls hold no server-side state here; ending one is only logged
    pub async fn end_call(&self, room_id: &str) -> Result<(), BackendError> {
        tracing::info!("Call ended in {}", room_id);
        Ok(())
    }
}

/// Join URL for `room_id` on the Element Call instance at `base`
pub fn call_url(base: &str, room_id: &str) -> Result<String, MatrixError> {
    let mut url = Url::parse(base).map_err(|e| {
        tracing::error!("Invalid Element Call URL '{}': {}", base, e);
        MatrixError::invalid_url(base)
    })?;

    url.path_segments_mut()
        .map_err(|_| {
            tracing::error!("Element Call URL '{}' cannot take a path", base);
            MatrixError::invalid_url(base)
        })?
        .pop_if_empty()
        .push("room");

    let params = form_urlencoded::Serializer::new(String::new())
        .append_pair("roomId", room_id)
        .finish();
    url.set_query(None);
    url.set_fragment(Some(&format!("?{}", params)));

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::settings::store::MemorySettingsStore;
    use crate::shared::SettingKey;
    use std::sync::Arc;

    fn service() -> ElementService {
        ElementService::new(ConfigService::new(Arc::new(MemorySettingsStore::new())))
    }

    #[test]
    fn test_call_url_format() {
        assert_eq!(
            call_url("https://call.element.io", "!abc:example.org").unwrap(),
            "https://call.element.io/room#?roomId=%21abc%3Aexample.org"
        );
        assert_eq!(
            call_url("https://example.org/call/", "!abc:example.org").unwrap(),
            "https://example.org/call/room#?roomId=%21abc%3Aexample.org"
        );
    }

    #[test]
    fn test_call_url_encodes_room_id() {
        let url = call_url("https://call.element.io", "!a&b=c#d:example.org").unwrap();
        assert_eq!(
            url,
            "https://call.element.io/room#?roomId=%21a%26b%3Dc%23d%3Aexample.org"
        );

        let fragment = Url::parse(&url).unwrap().fragment().unwrap().to_string();
        let pairs: Vec<(String, String)> = form_urlencoded::parse(fragment[1..].as_bytes())
            .into_owned()
            .collect();
        assert_eq!(pairs, vec![("roomId".to_string(), "!a&b=c#d:example.org".to_string())]);
    }

    #[test]
    fn test_call_url_rejects_invalid_base() {
        assert!(matches!(
            call_url("call.element.io", "!abc:example.org"),
            Err(MatrixError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_element_config_tracks_settings() {
        let element = service();
        assert_eq!(
            element.element_config().await.unwrap().element_call.url,
            "https://call.element.io"
        );

        let update = SettingsUpdate {
            element_call_url: Some("https://call.example.org".to_string()),
            matrix_server_url: Some("https://hs.example.org".to_string()),
            ..SettingsUpdate::default()
        };
        element.update_element_config(&update).await.unwrap();

        let config = element.element_config().await.unwrap();
        assert_eq!(config.element_call.url, "https://call.example.org");
        assert_eq!(config.default_server_config.homeserver.base_url, "https://hs.example.org");
    }

    #[tokio::test]
    async fn test_start_call_uses_configured_url() {
        let element = service();
        element
            .config
            .set(SettingKey::ElementCallUrl, "https://call.example.org")
            .await
            .unwrap();
        assert_eq!(
            element.start_call("!room:example.org").await.unwrap(),
            "https://call.example.org/room#?roomId=%21room%3Aexample.org"
        );
    }

    #[tokio::test]
    async fn test_start_call_with_broken_setting_fails() {
        let element = service();
        element
            .config
            .set(SettingKey::ElementCallUrl, "not a url")
            .await
            .unwrap();
        assert!(element.start_call("!room:example.org").await.is_err());
    }
}
