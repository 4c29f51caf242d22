/**
 * Element Handlers
 *
 * - `GET /api/element/config` - Element web client configuration
 * - `PUT /api/element/config` - update the settings it is built from
 *
 * # Update Body
 *
 * ```json
 * { "config": { "matrix_server_url": "https://hs.example.org" } }
 * ```
 *
 * Any subset of the six setting keys may be given; unknown keys and
 * non-string values are rejected before anything is written.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::element::service::ElementService;
use crate::backend::error::BackendError;
use crate::backend::middleware::CurrentUser;
use crate::shared::{ElementConfig, SettingsUpdate};

#[derive(Debug, Deserialize)]
pub struct UpdateElementConfigRequest {
    pub config: SettingsUpdate,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Json<Self> {
        Json(Self { success: true })
    }
}

pub async fn get_element_config(
    State(element): State<ElementService>,
) -> Result<Json<ElementConfig>, BackendError> {
    Ok(Json(element.element_config().await?))
}

/// Administrative settings write
pub async fn update_element_config(
    State(element): State<ElementService>,
    user: CurrentUser,
    payload: Result<Json<UpdateElementConfigRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, BackendError> {
    let admin = user.require_admin()?;
    let Json(request) = payload?;

    tracing::info!("{} is updating the Element configuration", admin.uid);
    element.update_element_config(&request.config).await?;
    Ok(SuccessResponse::ok())
}
