use axum::{
    body::Body,
    extract::{rejection::PathRejection, ConnectInfo, Path, State},
    http::{
        header::{CACHE_CONTROL, CONTENT_LENGTH, CONTENT_TYPE},
        HeaderMap, HeaderValue, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;

use crate::services::tracker::{self, TRACKING_PIXEL, TRACKING_PIXEL_CONTENT_TYPE};
use crate::utils::request_meta::{client_ip, user_agent};
use crate::AppState;

// GET /track/:id
// Always answers with the pixel. A failed write is logged and dropped here.
pub async fn track_pixel(
    path: Result<Path<String>, PathRejection>,
    uri: Uri,
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
) -> Response {
    let pixel_id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => {
            // Undecodable segment (e.g. invalid UTF-8): keep it percent-encoded
            tracing::warn!("Pixel id not decodable ({}), recording raw path", rejection);
            raw_pixel_id(&uri)
        }
    };
    tracing::info!("✅ Hit received: {}", pixel_id);

    let peer = connect_info.map(|ConnectInfo(addr)| addr);
    let ip = client_ip(&headers, peer, state.config.trust_proxy);

    let outcome = tracker::record_view(state.store.as_ref(), &pixel_id, ip, user_agent(&headers)).await;
    match outcome {
        Ok(event) => tracing::debug!("✅ View saved for {} at {}", event.pixel_id, event.viewed_at),
        Err(e) => tracing::error!("❌ Error saving view for {}: {}", pixel_id, e),
    }

    pixel_response()
}

fn raw_pixel_id(uri: &Uri) -> String {
    let path = uri.path();
    path.strip_prefix("/track/").unwrap_or(path).to_string()
}

pub fn pixel_response() -> Response {
    (
        StatusCode::OK,
        [
            (CONTENT_TYPE, HeaderValue::from_static(TRACKING_PIXEL_CONTENT_TYPE)),
            (CONTENT_LENGTH, HeaderValue::from(TRACKING_PIXEL.len())),
            (
                CACHE_CONTROL,
                HeaderValue::from_static("no-store, no-cache, must-revalidate, max-age=0"),
            ),
        ],
        Body::from(TRACKING_PIXEL),
    )
        .into_response()
}
