//! Authentication Module
//!
//! The bridge does not authenticate users itself. The host platform issues
//! signed session tokens; this module verifies them. Exchanging a host
//! session for a Matrix access token lives in `backend::matrix`.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! └── sessions.rs     - Session token creation and verification
//! ```

/// Session token creation and verification
pub mod sessions;

pub use sessions::{Claims, SessionError, SessionKeys};
