/**
 * Backend Error Types
 *
 * This module defines the error type returned by every HTTP handler.
 *
 * # Error Categories
 *
 * ## Precondition Errors
 *
 * Detected before any outbound call is made:
 * - No host session on the request
 * - Session without admin privileges on an admin endpoint
 *
 * ## Homeserver Errors
 *
 * Transport failures, non-2xx responses and malformed bodies from the
 * Matrix homeserver. Their messages are generic; details are logged.
 *
 * ## Storage Errors
 *
 * The settings store could not be read or written. Not retried.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::backend::matrix::error::MatrixError;
use crate::backend::settings::store::StorageError;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// Each variant is rendered as `{"error": <message>}`. Everything except an
/// explicit `HandlerError` is reported with status 500.
#[derive(Debug, Error)]
pub enum BackendError {
    /// No authenticated host user on the request
    #[error("User not authenticated")]
    NotAuthenticated,

    /// The host user is not an administrator
    #[error("Admin privileges required")]
    Forbidden,

    /// Handler error with an explicit status (e.g. unknown route)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Outbound homeserver call failed
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Settings store failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Request payload failed validation
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a validation error for a request field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SharedError(SharedError::validation(field, message))
    }

    /// Get the HTTP status code for this error
    ///
    /// The API reports every failure with 500; only `HandlerError` carries
    /// its own status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
