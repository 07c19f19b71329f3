pub mod dispatcher;
pub mod mailer;
pub mod tracker;
pub mod view_store;

pub use mailer::{MailError, Mailer, OutgoingEmail, SmtpMailer};
pub use view_store::{PgViewStore, StoreError, ViewStore};
