//! Shared Error Types
//!
//! Error types that describe malformed payloads, independent of the HTTP
//! layer. The backend wraps them in `BackendError`.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field is missing or has the wrong shape
//!
//! # Usage
//!
//! ```rust
//! use chat_bridge::shared::error::SharedError;
//!
//! let error = SharedError::validation("name", "Room name is required");
//! ```
use thiserror::Error;

/// Payload errors shared by server and clients
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Require a non-blank string field
pub fn require_non_empty(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("'{}' must not be empty", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let error = SharedError::validation("user_id", "missing");
        match error {
            SharedError::ValidationError { field, message } => {
                assert_eq!(field, "user_id");
                assert_eq!(message, "missing");
            }
            _ => panic!("Expected ValidationError"),
        }
    }

    #[test]
    fn test_error_display() {
        let error = SharedError::validation("name", "Room name is required");
        let display = format!("{}", error);
        assert!(display.contains("'name'"));
        assert!(display.contains("Room name is required"));
    }

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("name", "General").is_ok());
        assert!(require_non_empty("name", "   ").is_err());
        assert!(require_non_empty("name", "").is_err());
    }
}
