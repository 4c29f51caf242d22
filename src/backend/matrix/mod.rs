//! Matrix Module
//!
//! Everything that talks to the Matrix homeserver.
//!
//! # Module Structure
//!
//! ```text
//! matrix/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Homeserver request/response bodies
//! ├── error.rs     - Outbound call errors
//! ├── client.rs    - MatrixApi trait and its reqwest implementation
//! ├── service.rs   - Host user → Matrix user mapping and forwarding
//! └── handlers.rs  - /api/config, /api/matrix/config, /api/authenticate
//! ```

pub mod types;

pub mod error;

pub mod client;

pub mod service;

pub mod handlers;

pub use client::{HttpMatrixApi, MatrixApi};
pub use error::MatrixError;
pub use service::{matrix_user_id, MatrixService};
