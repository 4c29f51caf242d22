//! Homeserver call errors
//!
//! Messages are deliberately generic; the status, `errcode` and transport
//! details are kept on the value for logging.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    /// Transport failure or non-2xx response
    #[error("Matrix API request failed")]
    Request {
        endpoint: String,
        status: Option<u16>,
        detail: String,
    },

    /// 2xx response whose body could not be decoded
    #[error("Matrix API request failed")]
    InvalidResponse { endpoint: String, detail: String },

    /// Login succeeded at the HTTP level but yielded no access token
    #[error("Matrix authentication failed")]
    Authentication,

    /// A configured URL could not be parsed or extended
    #[error("Invalid service URL configured")]
    InvalidUrl { url: String },
}

impl MatrixError {
    pub fn request(endpoint: impl Into<String>, status: Option<u16>, detail: impl Into<String>) -> Self {
        Self::Request {
            endpoint: endpoint.into(),
            status,
            detail: detail.into(),
        }
    }

    pub fn invalid_response(endpoint: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidResponse {
            endpoint: endpoint.into(),
            detail: detail.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>) -> Self {
        Self::InvalidUrl { url: url.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_hide_details() {
        let error = MatrixError::request("/_matrix/client/r0/login", Some(403), "M_FORBIDDEN");
        assert_eq!(error.to_string(), "Matrix API request failed");

        let error = MatrixError::invalid_response("/joined_rooms", "expected value");
        assert_eq!(error.to_string(), "Matrix API request failed");

        assert_eq!(MatrixError::Authentication.to_string(), "Matrix authentication failed");

        let error = MatrixError::invalid_url("https://secret-hs.internal:8448");
        assert_eq!(error.to_string(), "Invalid service URL configured");
        assert!(!error.to_string().contains("secret-hs"));
    }
}
