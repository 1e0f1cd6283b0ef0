use axum::{ extract::State, http::StatusCode, response::IntoResponse, Json };

use crate::{ error::{ AppError, Result }, models::HealthReport, state::AppState };

pub async fn health_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let report = HealthReport::collect(&state).map_err(|e| {
        tracing::error!("Failed to assemble health report: {}", e);
        AppError::Internal(e)
    })?;

    Ok((StatusCode::OK, Json(report)))
}
