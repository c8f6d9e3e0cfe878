/**
 * SMTP Notification Backend
 *
 * Delivers the welcome email through an SMTP relay with lettre's async
 * transport. Mirrors the Resend backend's contract: best-effort, false
 * on any failure.
 */

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

/// Welcome email sender backed by an SMTP relay
#[derive(Clone)]
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl SmtpNotifier {
    /// Create a notifier for a TLS relay with credentials
    ///
    /// # Errors
    ///
    /// Relay construction fails on an unusable host name.
    pub fn new(
        host: &str,
        username: String,
        password: String,
        from: impl Into<String>,
    ) -> Result<Self, lettre::transport::smtp::Error> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
            .credentials(Credentials::new(username, password))
            .build();

        Ok(Self {
            transport,
            from: from.into(),
        })
    }

    /// Send the welcome email; false on any failure
    pub async fn send(&self, email: &str, name: &str) -> bool {
        let from = match self.from.parse() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                tracing::warn!("Invalid sender address '{}': {e}", self.from);
                return false;
            }
        };
        let to = match email.parse() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                tracing::warn!("Invalid recipient address '{email}': {e}");
                return false;
            }
        };

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(super::WELCOME_SUBJECT)
            .header(ContentType::TEXT_HTML)
            .body(super::welcome_html(name));

        let message = match message {
            Ok(message) => message,
            Err(e) => {
                tracing::warn!("Failed to build welcome email: {e}");
                return false;
            }
        };

        match self.transport.send(message).await {
            Ok(_) => {
                tracing::info!("Welcome email sent to {email}");
                true
            }
            Err(e) => {
                tracing::warn!("SMTP send failed: {e}");
                false
            }
        }
    }
}
