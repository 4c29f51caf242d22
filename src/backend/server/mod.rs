//! Server Module
//!
//! Server initialization, configuration loading and application state.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and settings store
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: port, database URL, session secret
//! 2. **Store Selection**: SQLite when reachable, in-memory otherwise
//! 3. **State Creation**: services wired around the store and HTTP client
//! 4. **Router Creation**: routes, session middleware, request tracing

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use state::AppState;
pub use init::{create_app, create_app_with_config};
