//! Records pixel fetches and lists them back.

use crate::models::ViewEvent;
use crate::services::view_store::{StoreError, ViewStore};

/// Transparent 1x1 GIF (`R0lGODlhAQABAIAAAAAAAP///ywAAAAAAQABAAACAUwAOw==`).
pub const TRACKING_PIXEL: &[u8] = &[
    0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x01, 0x00, 0x01, 0x00, 0x80, 0x00,
    0x00, 0x00, 0x00, 0x00, 0xff, 0xff, 0xff, 0x2c, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0x02, 0x01, 0x4c, 0x00, 0x3b,
];

pub const TRACKING_PIXEL_CONTENT_TYPE: &str = "image/gif";

/// Build and persist one view event. The caller decides what a failure means;
/// the pixel endpoint ignores it.
pub async fn record_view(
    store: &dyn ViewStore,
    pixel_id: &str,
    ip: Option<String>,
    user_agent: Option<String>,
) -> Result<ViewEvent, StoreError> {
    let event = ViewEvent::now(pixel_id, ip, user_agent);
    store.record(&event).await?;
    Ok(event)
}

/// All events, newest first. Ties keep the store's order.
pub async fn list_views(store: &dyn ViewStore) -> Result<Vec<ViewEvent>, StoreError> {
    let mut events = store.list_newest_first().await?;
    events.sort_by(|a, b| b.viewed_at.cmp(&a.viewed_at));
    Ok(events)
}
