/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the services every handler needs:
 * - `ConfigService` over the injected settings store
 * - `ElementService` for client configuration and call URLs
 * - `MatrixService` over the injected homeserver client
 * - `SessionKeys` for decoding host session tokens
 *
 * All of them are cheap to clone (`Arc` inside), and none caches settings.
 *
 * # Example
 *
 * ```rust,no_run
 * use chat_bridge::backend::settings::ConfigService;
 * use chat_bridge::shared::SettingKey;
 * use axum::extract::State;
 *
 * async fn handler(State(config): State<ConfigService>) {
 *     let _ = config.get(SettingKey::MatrixServerUrl).await;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::element::ElementService;
use crate::backend::matrix::{MatrixApi, MatrixService};
use crate::backend::settings::{ConfigService, SettingsStore};

/// Shared state for all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Settings accessor
    pub config: ConfigService,

    /// Element client configuration and calls
    pub element: ElementService,

    /// Homeserver forwarding
    pub matrix: MatrixService,

    /// Host session token verification
    pub session_keys: SessionKeys,
}

impl AppState {
    /// Wire the services around an injected store and homeserver client
    pub fn new(
        store: Arc<dyn SettingsStore>,
        matrix_api: Arc<dyn MatrixApi>,
        session_keys: SessionKeys,
    ) -> Self {
        let config = ConfigService::new(store);
        Self {
            element: ElementService::new(config.clone()),
            matrix: MatrixService::new(config.clone(), matrix_api),
            config,
            session_keys,
        }
    }
}

impl FromRef<AppState> for ConfigService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

impl FromRef<AppState> for ElementService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.element.clone()
    }
}

impl FromRef<AppState> for MatrixService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.matrix.clone()
    }
}

impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_keys.clone()
    }
}
