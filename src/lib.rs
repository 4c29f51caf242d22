//! Chat Bridge - Main Library
//!
//! Chat Bridge is a thin integration service that connects a host platform's
//! user sessions and key/value settings to an external Matrix homeserver and
//! the Element web client.
//!
//! # Overview
//!
//! This library provides:
//! - A settings accessor for the six stored bridge settings
//! - The Element web client configuration payload built from those settings
//! - A login forwarder that exchanges a host session for a Matrix access token
//! - Pass-through room, call and user operations against the homeserver
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by the server and its clients
//!   - Settings keys and defaults, Element config payload, error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, settings storage, homeserver client, sessions
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use chat_bridge::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await.expect("invalid server configuration");
//! // Use app with Axum server
//! # }
//! ```

/// Types shared between server and clients
pub mod shared;

/// Server-side code
pub mod backend;
