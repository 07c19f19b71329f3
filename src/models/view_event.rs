//! One row per tracking pixel fetch. Never updated or deleted once written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::PixelId;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ViewEvent {
    pub pixel_id: PixelId,
    pub viewed_at: DateTime<Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
}

impl ViewEvent {
    /// Stamp a new event with the current time.
    pub fn now(pixel_id: impl Into<PixelId>, ip: Option<String>, user_agent: Option<String>) -> Self {
        Self {
            pixel_id: pixel_id.into(),
            viewed_at: Utc::now(),
            ip,
            user_agent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let event = ViewEvent::now("abc123", Some("10.0.0.1".to_string()), None);
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["pixelId"], "abc123");
        assert_eq!(value["ip"], "10.0.0.1");
        assert!(value["userAgent"].is_null());
        assert!(value["viewedAt"].is_string());
        assert!(value.get("pixel_id").is_none());
    }
}
