use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{database, models::HealthResponse, AppState};

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match database::check_health(&state.db).await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::HEALTHY)),
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthResponse::UNHEALTHY))
        }
    }
}
