use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::services::dispatcher::{self, TrackedEmail};
use crate::AppState;

#[derive(Deserialize)]
pub struct SendEmailRequest {
    pub to: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
    pub success: bool,
    pub pixel_id: String,
}

pub async fn send_email(
    State(state): State<AppState>,
    Json(payload): Json<SendEmailRequest>,
) -> Result<Json<SendEmailResponse>, ApiError> {
    let pixel_id = dispatcher::send_tracked_email(
        state.mailer.as_ref(),
        state.config.sender(),
        &state.config.base_url,
        TrackedEmail {
            to: &payload.to,
            subject: &payload.subject,
            message: &payload.message,
        },
    )
    .await
    .map_err(|e| {
        tracing::error!("❌ Error sending tracked email to {}: {}", payload.to, e);
        ApiError::from(e)
    })?;

    Ok(Json(SendEmailResponse {
        success: true,
        pixel_id,
    }))
}
