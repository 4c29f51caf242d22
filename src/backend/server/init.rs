/**
 * Server Initialization
 *
 * Builds the application state from configuration and returns the router.
 *
 * # Initialization Process
 *
 * 1. Load configuration from the environment
 * 2. Open the settings store (SQLite or in-memory)
 * 3. Create the homeserver client and session keys
 * 4. Create the router
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::matrix::HttpMatrixApi;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_server_config, load_settings_store};
use crate::backend::server::state::AppState;
use crate::shared::config::{ConfigError, ServerConfig};

/// Create the application from environment configuration
pub async fn create_app() -> Result<Router<()>, ConfigError> {
    let config = load_server_config()?;
    Ok(create_app_with_config(&config).await)
}

/// Create the application for an explicit configuration
pub async fn create_app_with_config(config: &ServerConfig) -> Router<()> {
    tracing::info!("Initializing chat bridge server");

    let store = load_settings_store(config).await;
    let app_state = AppState::new(
        store,
        Arc::new(HttpMatrixApi::new()),
        SessionKeys::new(&config.session_secret),
    );

    let app = create_router(app_state);
    tracing::info!("Router configured");

    app
}
