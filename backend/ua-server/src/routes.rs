use crate::{
    AppState, create_user, delete_user, get_user, health, list_users, request_logging,
    update_user,
};

use axum::{Router, middleware, routing::get};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home))
        // User collection (with and without trailing slash)
        .route("/api/user", get(list_users).post(create_user))
        .route("/api/user/", get(list_users).post(create_user))
        // Single user
        .route(
            "/api/user/{id}",
            get(get_user).patch(update_user).delete(delete_user),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(middleware::from_fn(request_logging::log_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
