//! Element Module
//!
//! Element web client configuration and Element Call URLs.
//!
//! - **`service`** - `ElementService`
//! - **`handlers`** - `/api/element/config` handlers

pub mod service;

pub mod handlers;

pub use service::{call_url, ElementService};
pub use handlers::SuccessResponse;
