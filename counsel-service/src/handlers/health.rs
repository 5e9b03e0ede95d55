use crate::startup::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;
use service_core::error::AppError;

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "counsel-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Not ready until the question provider reports healthy (missing credential
/// or unreachable API). The service still starts and serves either way.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    state.question_provider.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Readiness check failed");
        AppError::ServiceUnavailable
    })?;

    Ok(StatusCode::OK)
}
