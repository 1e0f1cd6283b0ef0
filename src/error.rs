use axum::{ http::StatusCode, response::IntoResponse, Json };
use chrono::Utc;
use serde_json::json;
use thiserror::Error;

use crate::models::HealthStatus;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")] Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let AppError::Internal(err) = self;

        let mut message = err.to_string();
        if message.is_empty() {
            message = "Unknown error".to_string();
        }

        let body = Json(json!({
            "status": HealthStatus::Error,
            "timestamp": Utc::now().to_rfc3339(),
            "error": message,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use http_body_util::BodyExt;
    use serde_json::Value;

    #[tokio::test]
    async fn internal_error_renders_error_body() {
        let response = AppError::Internal(anyhow::anyhow!("boom")).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["status"], "ERROR");
        assert_eq!(body["error"], "boom");
        DateTime::parse_from_rfc3339(body["timestamp"].as_str().unwrap()).unwrap();
    }

    #[tokio::test]
    async fn blank_message_falls_back_to_unknown_error() {
        let response = AppError::Internal(anyhow::anyhow!("")).into_response();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body["error"], "Unknown error");
    }
}
