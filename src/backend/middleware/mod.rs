//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Host session decoding and the `CurrentUser` extractor

pub mod auth;

pub use auth::{bearer_token, session_middleware, CurrentUser, SessionUser};
