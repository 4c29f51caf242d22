/**
 * Matrix Handlers
 *
 * - `GET /api/config` and `GET /api/matrix/config` - combined client config
 * - `POST /api/authenticate` - Matrix access token for the session user
 */

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use crate::backend::element::ElementService;
use crate::backend::error::BackendError;
use crate::backend::matrix::service::MatrixService;
use crate::backend::middleware::CurrentUser;
use crate::shared::ClientConfig;

/// `POST /api/authenticate` response
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Combined Element config, homeserver URL and feature flags
pub async fn get_client_config(
    State(element): State<ElementService>,
) -> Result<Json<ClientConfig>, BackendError> {
    Ok(Json(element.client_config().await?))
}

/// Obtain a Matrix access token for the current host user
///
/// Fails before any outbound call when there is no host session.
pub async fn authenticate(
    State(matrix): State<MatrixService>,
    user: CurrentUser,
) -> Result<Json<TokenResponse>, BackendError> {
    let user = user.require()?;
    let access_token = matrix.authenticate(&user).await?;
    Ok(Json(TokenResponse { access_token }))
}
