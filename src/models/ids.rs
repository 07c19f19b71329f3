//! Pixel identifiers are opaque strings. Ids issued by the dispatcher are v4 UUIDs,
//! but the tracker accepts whatever appears in the path.

use uuid::Uuid;

pub type PixelId = String;

/// Issue a fresh pixel id (hyphenated v4 UUID, 36 chars).
pub fn new_pixel_id() -> PixelId {
    Uuid::new_v4().to_string()
}
