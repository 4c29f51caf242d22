/**
 * Router Configuration
 *
 * Combines the API routes, the session middleware and request tracing into
 * a single Axum router.
 */

use axum::{http::StatusCode, middleware, Router};
use tower_http::trace::TraceLayer;

use crate::backend::error::BackendError;
use crate::backend::middleware::session_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// Unknown routes answer 404 with a JSON error body.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            app_state.clone(),
            session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn not_found() -> BackendError {
    BackendError::handler(StatusCode::NOT_FOUND, "Not Found")
}
