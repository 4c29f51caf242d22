//! Common test utilities and helpers
//!
//! Builds the bridge router around an in-memory settings store and a
//! wiremock homeserver, and drives it with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use wiremock::MockServer;

use chat_bridge::backend::auth::SessionKeys;
use chat_bridge::backend::matrix::HttpMatrixApi;
use chat_bridge::backend::routes::create_router;
use chat_bridge::backend::server::AppState;
use chat_bridge::backend::settings::{ConfigService, MemorySettingsStore};
use chat_bridge::shared::SettingKey;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const SERVER_NAME: &str = "example.org";
pub const APP_TOKEN: &str = "as_token";

/// Router plus the collaborators a test needs to reach
pub struct TestApp {
    pub router: Router,
    pub config: ConfigService,
    pub keys: SessionKeys,
    pub homeserver: MockServer,
}

impl TestApp {
    /// App whose settings point at a fresh mock homeserver
    pub async fn new() -> Self {
        let homeserver = MockServer::start().await;
        let state = AppState::new(
            Arc::new(MemorySettingsStore::new()),
            Arc::new(HttpMatrixApi::new()),
            SessionKeys::new(TEST_SECRET),
        );

        state
            .config
            .set(SettingKey::MatrixServerUrl, &homeserver.uri())
            .await
            .expect("Failed to set server URL");
        state
            .config
            .set(SettingKey::MatrixServerName, SERVER_NAME)
            .await
            .expect("Failed to set server name");
        state
            .config
            .set(SettingKey::MatrixAppToken, APP_TOKEN)
            .await
            .expect("Failed to set app token");

        Self {
            router: create_router(state.clone()),
            config: state.config,
            keys: state.session_keys,
            homeserver,
        }
    }

    /// Session token for a regular host user
    pub fn user_token(&self, uid: &str) -> String {
        self.keys.create_token(uid, false).expect("Failed to create test token")
    }

    /// Session token for a host administrator
    pub fn admin_token(&self, uid: &str) -> String {
        self.keys.create_token(uid, true).expect("Failed to create test token")
    }

    /// Send a request and return status and JSON body (`Null` when empty)
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
        self.send(Method::POST, uri, token, body).await
    }
}

/// Matrix client-server API path
pub fn client_path(rest: &str) -> String {
    format!("/_matrix/client/r0/{}", rest)
}
