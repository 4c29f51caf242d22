//! Backend Module
//!
//! Server-side code for the chat bridge: an Axum HTTP server exposing the
//! `/api/*` surface, the settings store, and the Matrix homeserver client.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`settings`** - Settings store and typed access
//! - **`element`** - Element client configuration and call URLs
//! - **`matrix`** - Homeserver client, login forwarding
//! - **`rooms`** - Room, call and user endpoints
//! - **`auth`** - Host session tokens
//! - **`middleware`** - Session middleware and `CurrentUser` extractor
//! - **`error`** - Backend error type and JSON error responses
//!
//! # Request Model
//!
//! Every request is handled independently: settings are read from the store,
//! at most one call is made to the homeserver, and the result (or a
//! `{"error": ...}` body with status 500) is returned. There are no retries
//! and no background tasks.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// Settings storage and access
#[cfg(feature = "ssr")]
pub mod settings;

/// Element web client configuration
#[cfg(feature = "ssr")]
pub mod element;

/// Matrix homeserver integration
#[cfg(feature = "ssr")]
pub mod matrix;

/// Room, call and user endpoints
#[cfg(feature = "ssr")]
pub mod rooms;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// Host session tokens
#[cfg(feature = "ssr")]
pub mod auth;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::{create_app, AppState};
#[cfg(feature = "ssr")]
pub use error::BackendError;
