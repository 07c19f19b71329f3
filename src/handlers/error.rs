use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::services::{MailError, StoreError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Mail(#[from] MailError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::Mail(MailError::InvalidRecipient { .. }) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({"success": false, "error": self.to_string()}),
            ),
            ApiError::Mail(MailError::Transport(_)) => (
                StatusCode::BAD_GATEWAY,
                serde_json::json!({"success": false, "error": "Failed to send email"}),
            ),
            ApiError::Mail(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({"success": false, "error": "Mail sender is misconfigured"}),
            ),
            ApiError::Store(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({"error": "Database error"}),
            ),
        };

        (status, Json(body)).into_response()
    }
}
