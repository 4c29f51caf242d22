/**
 * Room, Call and User Handlers
 *
 * Every handler requires a host session and then forwards a single call.
 * Results from the homeserver are relayed unchanged; any failure becomes
 * `{"error": ...}` with status 500. Nothing is deduplicated: repeating a
 * request repeats the outbound call.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::Json,
};

use crate::backend::element::{ElementService, SuccessResponse};
use crate::backend::error::BackendError;
use crate::backend::matrix::MatrixService;
use crate::backend::middleware::CurrentUser;
use crate::backend::rooms::types::{
    CallResponse, CreateRoomRequest, InviteRequest, RoomCreatedResponse, RoomsResponse,
    UserSearchQuery, UsersResponse,
};

/// `GET /api/rooms`
pub async fn list_rooms(
    State(matrix): State<MatrixService>,
    user: CurrentUser,
) -> Result<Json<RoomsResponse>, BackendError> {
    let user = user.require()?;
    let rooms = matrix.user_rooms(&user).await?;
    Ok(Json(RoomsResponse { rooms }))
}

/// `POST /api/rooms`
pub async fn create_room(
    State(matrix): State<MatrixService>,
    user: CurrentUser,
    payload: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<Json<RoomCreatedResponse>, BackendError> {
    let user = user.require()?;
    let Json(request) = payload?;
    request.validate()?;

    let room_id = matrix
        .create_room(&user, &request.name, request.topic(), request.is_public())
        .await?;
    Ok(Json(RoomCreatedResponse { room_id }))
}

/// `POST /api/rooms/{roomId}/join`
pub async fn join_room(
    State(matrix): State<MatrixService>,
    user: CurrentUser,
    Path(room_id): Path<String>,
) -> Result<Json<SuccessResponse>, BackendError> {
    let user = user.require()?;
    matrix.join_room(&user, &room_id).await?;
    Ok(SuccessResponse::ok())
}

/// `POST /api/rooms/{roomId}/leave`
pub async fn leave_room(
    State(matrix): State<MatrixService>,
    user: CurrentUser,
    Path(room_id): Path<String>,
) -> Result<Json<SuccessResponse>, BackendError> {
    let user = user.require()?;
    matrix.leave_room(&user, &room_id).await?;
    Ok(SuccessResponse::ok())
}

/// `POST /api/rooms/{roomId}/call`
pub async fn start_call(
    State(element): State<ElementService>,
    user: CurrentUser,
    Path(room_id): Path<String>,
) -> Result<Json<CallResponse>, BackendError> {
    user.require()?;
    let call_url = element.start_call(&room_id).await?;
    Ok(Json(CallResponse { call_url }))
}

/// `DELETE /api/rooms/{roomId}/call`
pub async fn end_call(
    State(element): State<ElementService>,
    user: CurrentUser,
    Path(room_id): Path<String>,
) -> Result<Json<SuccessResponse>, BackendError> {
    user.require()?;
    element.end_call(&room_id).await?;
    Ok(SuccessResponse::ok())
}

/// `GET /api/users`
pub async fn list_users(
    State(matrix): State<MatrixService>,
    user: CurrentUser,
    Query(query): Query<UserSearchQuery>,
) -> Result<Json<UsersResponse>, BackendError> {
    let user = user.require()?;
    let users = matrix.known_users(&user, &query.search).await?;
    Ok(Json(UsersResponse { users }))
}

/// `POST /api/rooms/{roomId}/invite`
pub async fn invite_user(
    State(matrix): State<MatrixService>,
    user: CurrentUser,
    Path(room_id): Path<String>,
    payload: Result<Json<InviteRequest>, JsonRejection>,
) -> Result<Json<SuccessResponse>, BackendError> {
    let user = user.require()?;
    let Json(request) = payload?;
    request.validate()?;

    matrix.invite_user(&user, &room_id, &request.user_id).await?;
    Ok(SuccessResponse::ok())
}
