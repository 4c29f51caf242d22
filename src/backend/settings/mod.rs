//! Settings Module
//!
//! Storage and typed access for the bridge's six settings.
//!
//! # Module Structure
//!
//! ```text
//! settings/
//! ├── mod.rs       - Module exports and documentation
//! ├── store.rs     - SettingsStore trait, StorageError, in-memory store
//! ├── sqlite.rs    - SQLite-backed store
//! ├── service.rs   - ConfigService (defaults, snapshot, partial updates)
//! └── handlers.rs  - GET /api/admin/settings
//! ```

/// Key/value store abstraction
pub mod store;

/// SQLite implementation
pub mod sqlite;

/// Typed settings access
pub mod service;

/// Admin settings handler
pub mod handlers;

pub use store::{MemorySettingsStore, SettingsStore, StorageError};
pub use sqlite::SqliteSettingsStore;
pub use service::ConfigService;
