//! Composes the tracked email and hands it to the mailer.

use crate::models::{new_pixel_id, PixelId};
use crate::services::mailer::{MailError, Mailer, OutgoingEmail};

pub struct TrackedEmail<'a> {
    pub to: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

pub fn tracking_url(base_url: &str, pixel_id: &str) -> String {
    format!("{}/track/{}", base_url.trim_end_matches('/'), pixel_id)
}

// `message` goes in verbatim so callers can send rich HTML.
pub fn compose_html(message: &str, tracking_url: &str) -> String {
    format!(
        "<p>{}</p>\n<img src=\"{}\" width=\"1\" height=\"1\" />",
        message, tracking_url
    )
}

/// Issue a pixel id, embed it in the body and send exactly one email.
/// Returns the id only once the mailer has accepted the message.
pub async fn send_tracked_email(
    mailer: &dyn Mailer,
    sender: &str,
    base_url: &str,
    email: TrackedEmail<'_>,
) -> Result<PixelId, MailError> {
    let pixel_id = new_pixel_id();
    let html = compose_html(email.message, &tracking_url(base_url, &pixel_id));

    mailer
        .send(&OutgoingEmail {
            from: sender.to_string(),
            to: email.to.to_string(),
            subject: email.subject.to_string(),
            html,
        })
        .await?;

    tracing::info!("📧 Tracked email sent to {} (pixel {})", email.to, pixel_id);
    Ok(pixel_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::mailer::MockMailer;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_tracking_url_trims_trailing_slash() {
        assert_eq!(
            tracking_url("https://px.example.com/", "abc"),
            "https://px.example.com/track/abc"
        );
        assert_eq!(
            tracking_url("https://px.example.com", "abc"),
            "https://px.example.com/track/abc"
        );
    }

    #[test]
    fn test_compose_html_keeps_message_unescaped() {
        let html = compose_html("<b>Hello</b>", "http://x/track/1");
        assert!(html.starts_with("<p><b>Hello</b></p>"));
        assert!(html.contains(r#"<img src="http://x/track/1" width="1" height="1" />"#));
    }

    #[tokio::test]
    async fn test_send_embeds_returned_pixel_id() {
        let sent_html = Arc::new(Mutex::new(None::<String>));
        let captured = sent_html.clone();

        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .withf(|email| {
                email.from == "sender@example.com"
                    && email.to == "a@example.com"
                    && email.subject == "Hi"
                    && email.html.contains("<b>Hello</b>")
            })
            .times(1)
            .returning(move |email| {
                *captured.lock().unwrap() = Some(email.html.clone());
                Ok(())
            });

        let pixel_id = send_tracked_email(
            &mailer,
            "sender@example.com",
            "http://localhost:8000",
            TrackedEmail { to: "a@example.com", subject: "Hi", message: "<b>Hello</b>" },
        )
        .await
        .unwrap();

        assert_eq!(pixel_id.len(), 36);
        let html = sent_html.lock().unwrap().clone().unwrap();
        assert!(html.contains(&format!(
            r#"<img src="http://localhost:8000/track/{}""#,
            pixel_id
        )));
    }

    #[tokio::test]
    async fn test_send_propagates_transport_failure() {
        let mut mailer = MockMailer::new();
        mailer
            .expect_send()
            .times(1)
            .returning(|_| Err(MailError::Transport("connection refused".to_string())));

        let result = send_tracked_email(
            &mailer,
            "sender@example.com",
            "http://localhost:8000",
            TrackedEmail { to: "a@example.com", subject: "Hi", message: "Hello" },
        )
        .await;

        assert!(matches!(result, Err(MailError::Transport(_))));
    }
}
