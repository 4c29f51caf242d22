//! Shared Module
//!
//! Types shared between the server and anything that talks to it. All types
//! serialize to the JSON shapes exposed by the HTTP surface.

/// Stored settings, keys and defaults
pub mod settings;

/// Element web client configuration payload
pub mod element;

/// Shared error types
pub mod error;

/// Server process configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use settings::{ChatSettings, SettingKey, SettingsUpdate, APP_NAMESPACE};
pub use element::{BridgeFeatures, ClientConfig, ElementConfig};
pub use error::SharedError;
pub use config::{ServerConfig, ServerConfigBuilder, ConfigError};
