pub mod email;
pub mod error;
pub mod logs;
pub mod tracking;

pub use email::{send_email, SendEmailRequest, SendEmailResponse};
pub use error::ApiError;
pub use logs::get_logs;
pub use tracking::{pixel_response, track_pixel};

pub async fn root() -> &'static str {
    "Pixel tracker is running"
}

pub async fn health_check() -> &'static str {
    "OK"
}
