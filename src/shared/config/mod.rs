//! Server configuration module
//!
//! Process-level configuration for the bridge server. Values are normally
//! read from the environment by `backend::server::config`; the builder keeps
//! defaults and validation in one place.

use thiserror::Error;

/// Default HTTP port
pub const DEFAULT_PORT: u16 = 3000;

/// Secret used when `SESSION_SECRET` is not provided
pub const DEVELOPMENT_SESSION_SECRET: &str = "development-session-secret-change-me";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// SQLite URL for the settings store, in-memory store when `None`
    pub database_url: Option<String>,
    /// HS256 secret shared with the host platform for session tokens
    pub session_secret: String,
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }
        if self.session_secret.is_empty() {
            return Err(ConfigError::MissingValue("session_secret"));
        }
        Ok(())
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    port: Option<u16>,
    database_url: Option<String>,
    session_secret: Option<String>,
}

impl ServerConfigBuilder {
    /// Set the listening port
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Parse the listening port from a string
    pub fn port_str(mut self, port: &str) -> Result<Self, ConfigError> {
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(port.to_string()))?;
        self.port = Some(port);
        Ok(self)
    }

    /// Set the settings database URL
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the session token secret
    pub fn session_secret(mut self, secret: impl Into<String>) -> Self {
        self.session_secret = Some(secret.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let config = ServerConfig {
            port: self.port.unwrap_or(DEFAULT_PORT),
            database_url: self.database_url.filter(|url| !url.is_empty()),
            session_secret: self
                .session_secret
                .unwrap_or_else(|| DEVELOPMENT_SESSION_SECRET.to_string()),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port: {0}")]
    InvalidPort(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ServerConfig::builder().build().unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert!(config.database_url.is_none());
        assert_eq!(config.session_secret, DEVELOPMENT_SESSION_SECRET);
    }

    #[test]
    fn test_builder_rejects_bad_port() {
        assert!(matches!(
            ServerConfig::builder().port_str("not-a-port"),
            Err(ConfigError::InvalidPort(_))
        ));
        assert!(matches!(
            ServerConfig::builder().port(0).build(),
            Err(ConfigError::InvalidPort(_))
        ));
    }

    #[test]
    fn test_builder_rejects_empty_secret() {
        let result = ServerConfig::builder().session_secret("").build();
        assert!(matches!(result, Err(ConfigError::MissingValue("session_secret"))));
    }

    #[test]
    fn test_empty_database_url_means_memory_store() {
        let config = ServerConfig::builder()
            .database_url("")
            .port_str("8080")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.port, 8080);
        assert!(config.database_url.is_none());
    }
}
