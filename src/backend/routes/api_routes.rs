/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Configuration
 * - `GET /api/config` - Combined client configuration
 * - `GET /api/matrix/config` - Same as `/api/config`
 * - `GET /api/element/config` - Element web client configuration
 * - `PUT /api/element/config` - Update settings (admin)
 * - `GET /api/admin/settings` - Admin form values (admin)
 *
 * ## Authentication
 * - `POST /api/authenticate` - Matrix access token for the session user
 *
 * ## Rooms, calls, users
 * - `GET /api/rooms`, `POST /api/rooms`
 * - `POST /api/rooms/{roomId}/join`, `POST /api/rooms/{roomId}/leave`
 * - `POST /api/rooms/{roomId}/call`, `DELETE /api/rooms/{roomId}/call`
 * - `POST /api/rooms/{roomId}/invite`
 * - `GET /api/users`
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::backend::element::handlers::{get_element_config, update_element_config};
use crate::backend::matrix::handlers::{authenticate, get_client_config};
use crate::backend::rooms::handlers::{
    create_room, end_call, invite_user, join_room, leave_room, list_rooms, list_users, start_call,
};
use crate::backend::server::state::AppState;
use crate::backend::settings::handlers::get_admin_settings;

/// Add every API route to `router`
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Configuration endpoints
        .route("/api/config", get(get_client_config))
        .route("/api/matrix/config", get(get_client_config))
        .route(
            "/api/element/config",
            get(get_element_config).put(update_element_config),
        )
        .route("/api/admin/settings", get(get_admin_settings))
        // Authentication
        .route("/api/authenticate", post(authenticate))
        // Room management
        .route("/api/rooms", get(list_rooms).post(create_room))
        .route("/api/rooms/{room_id}/join", post(join_room))
        .route("/api/rooms/{room_id}/leave", post(leave_room))
        // Call management
        .route("/api/rooms/{room_id}/call", post(start_call).delete(end_call))
        // User management
        .route("/api/users", get(list_users))
        .route("/api/rooms/{room_id}/invite", post(invite_user))
}
