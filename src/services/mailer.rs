//! Outbound mail port and its SMTP adapter (lettre).

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid recipient address {address:?}: {reason}")]
    InvalidRecipient { address: String, reason: String },

    #[error("invalid sender address {address:?}: {reason}")]
    InvalidSender { address: String, reason: String },

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("mail transport failed: {0}")]
    Transport(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message. No retries.
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Implicit-TLS relay (port 465) authenticated with the account credentials.
    pub fn new(host: &str, username: String, password: String) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)
            .map_err(|e| MailError::Transport(e.to_string()))?
            .credentials(Credentials::new(username, password))
            .build();

        Ok(Self { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let message = build_message(email)?;
        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        Ok(())
    }
}

pub fn build_message(email: &OutgoingEmail) -> Result<Message, MailError> {
    let from = email.from.parse::<Mailbox>().map_err(|e| {
        MailError::InvalidSender {
            address: email.from.clone(),
            reason: e.to_string(),
        }
    })?;
    let to = email.to.parse::<Mailbox>().map_err(|e| {
        MailError::InvalidRecipient {
            address: email.to.clone(),
            reason: e.to_string(),
        }
    })?;

    Message::builder()
        .from(from)
        .to(to)
        .subject(email.subject.clone())
        .header(ContentType::TEXT_HTML)
        .body(email.html.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(from: &str, to: &str) -> OutgoingEmail {
        OutgoingEmail {
            from: from.to_string(),
            to: to.to_string(),
            subject: "Hi".to_string(),
            html: "<p><b>Hello</b></p>".to_string(),
        }
    }

    #[test]
    fn test_build_message_sets_headers_and_html_body() {
        let message = build_message(&email("sender@example.com", "a@example.com")).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("From: sender@example.com"));
        assert!(raw.contains("To: a@example.com"));
        assert!(raw.contains("Subject: Hi"));
        assert!(raw.contains("Content-Type: text/html"));
        assert!(raw.contains("<b>Hello</b>"));
    }

    #[test]
    fn test_build_message_rejects_bad_recipient() {
        let err = build_message(&email("sender@example.com", "not an address")).unwrap_err();
        assert!(matches!(err, MailError::InvalidRecipient { .. }));
    }

    #[test]
    fn test_build_message_rejects_missing_sender() {
        let err = build_message(&email("", "a@example.com")).unwrap_err();
        assert!(matches!(err, MailError::InvalidSender { .. }));
    }
}
