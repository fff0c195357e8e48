use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::AppState;

/// Reports service and database status. A broken database connection shows up
/// in the body, not as a 5xx.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service status")
    )
)]
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let db_status = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.pool)
        .await
    {
        Ok(_) => "healthy".to_string(),
        Err(e) => format!("unhealthy: {}", e),
    };

    let body = json!({
        "status": "ok",
        "database": db_status,
    });
    (StatusCode::OK, Json(body))
}
