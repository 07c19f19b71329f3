//! Shared types: pixel ids and view events. Timestamps are chrono UTC values.

pub mod ids;
pub mod view_event;

pub use ids::{new_pixel_id, PixelId};
pub use view_event::ViewEvent;
