use crate::AppState;

use std::time::SystemTime;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde_json::json;

pub const BANNER: &str = "<h1> USER REST API </h1>";

/// GET / - Static banner
pub async fn home() -> Html<&'static str> {
    Html(BANNER)
}

/// GET /health - Health check with database status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let (status, database, users) = match state.users().count().await {
        Ok(count) => (StatusCode::OK, "operational", Some(count)),
        Err(e) => {
            log::error!("Health check failed to reach database: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable", None)
        }
    };

    let health = json!({
        "status": if status.is_success() { "healthy" } else { "unhealthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "database": database,
        },
        "users": users,
        "timestamp": humantime::format_rfc3339_seconds(SystemTime::now()).to_string(),
    });

    (status, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (can we reach the database?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (StatusCode::OK, "Ready").into_response(),
        Err(e) => {
            log::warn!("Readiness check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, "Not Ready").into_response()
        }
    }
}
