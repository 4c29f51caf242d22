/**
 * Session Middleware
 *
 * Decodes the host platform session token from the `Authorization` header
 * and attaches the resulting `SessionUser` to the request. A request
 * without a valid token passes through with no user; handlers that need
 * one report `User not authenticated` themselves.
 */

use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::BackendError;

/// Host platform user attached to a request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    /// Host user id (local part of the Matrix id)
    pub uid: String,
    pub display_name: Option<String>,
    pub is_admin: bool,
}

/// Session middleware
///
/// Never rejects a request. Invalid tokens are logged and ignored.
pub async fn session_middleware(
    State(keys): State<SessionKeys>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(request.headers()) {
        match keys.verify_token(token) {
            Ok(claims) => {
                request.extensions_mut().insert(SessionUser {
                    uid: claims.sub,
                    display_name: claims.name,
                    is_admin: claims.admin,
                });
            }
            Err(e) => {
                tracing::warn!("Ignoring invalid session token: {}", e);
            }
        }
    }

    next.run(request).await
}

/// Extract a bearer token ("Bearer <token>") from the headers
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Axum extractor for the (optional) session user
#[derive(Clone, Debug)]
pub struct CurrentUser(pub Option<SessionUser>);

impl CurrentUser {
    /// The session user, or `NotAuthenticated`
    pub fn require(self) -> Result<SessionUser, BackendError> {
        self.0.ok_or_else(|| {
            tracing::warn!("Request without an authenticated host user");
            BackendError::NotAuthenticated
        })
    }

    /// The session user if they are an administrator
    pub fn require_admin(self) -> Result<SessionUser, BackendError> {
        let user = self.require()?;
        if !user.is_admin {
            tracing::warn!("User {} is not an administrator", user.uid);
            return Err(BackendError::Forbidden);
        }
        Ok(user)
    }
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(CurrentUser(parts.extensions.get::<SessionUser>().cloned()))
    }
}
