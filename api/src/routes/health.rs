use axum::{Json, Router, response::IntoResponse, routing::get};
use serde::Serialize;

/// Builds the `/health` route group.
pub fn health_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(health_check))
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// GET /health
///
/// Always answers, whatever state the database is in.
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "status": "ok" }
/// ```
pub async fn health_check() -> impl IntoResponse {
    Json(HealthStatus { status: "ok" })
}
