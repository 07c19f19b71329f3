use axum::{extract::State, response::Json};

use super::error::ApiError;
use crate::models::ViewEvent;
use crate::services::tracker;
use crate::AppState;

// GET /logs - every view event, newest first
pub async fn get_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<ViewEvent>>, ApiError> {
    let events = tracker::list_views(state.store.as_ref()).await.map_err(|e| {
        tracing::error!("Error fetching view logs: {}", e);
        ApiError::from(e)
    })?;

    Ok(Json(events))
}
