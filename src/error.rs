//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures surfaced to clients. `BadRequest` and `NotFound` carry the exact
/// wire message; everything else renders as a generic 500.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub msg: String,
}

/// PostgreSQL "invalid text representation" (e.g. a non-numeric value where
/// an integer identifier is expected).
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

fn is_invalid_input(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .and_then(|d| d.code())
        .map(|c| c == INVALID_TEXT_REPRESENTATION)
        .unwrap_or(false)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            AppError::Db(e) if is_invalid_input(e) => {
                (StatusCode::BAD_REQUEST, "Bad Request".to_string())
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Db(e) => {
                tracing::error!(error = %e, "unhandled database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { msg })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render(err: AppError) -> (StatusCode, String) {
        let resp = err.into_response();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, body["msg"].as_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn bad_request_carries_message() {
        let (status, msg) = render(AppError::BadRequest("Incomplete comment".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Incomplete comment");
    }

    #[tokio::test]
    async fn not_found_carries_message() {
        let (status, msg) = render(AppError::NotFound("review_id not found".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "review_id not found");
    }

    #[tokio::test]
    async fn unrecognized_db_error_is_500() {
        let (status, msg) = render(AppError::Db(sqlx::Error::PoolClosed)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(msg, "Internal Server Error");
    }
}
