//! Notification Module
//!
//! The welcome-notification capability. One interface --
//! `send_welcome(email, name) -> bool` -- with the delivery channel
//! selected by configuration: the Resend HTTP API, direct SMTP, or
//! disabled. Orchestration logic never varies by backend.
//!
//! Notification is strictly best-effort: a `false` is logged by the
//! caller and swallowed, and nothing here can fail a login.

/// Resend HTTP API backend
pub mod resend;

/// Direct SMTP backend
pub mod smtp;

pub use resend::ResendNotifier;
pub use smtp::SmtpNotifier;

/// Subject line of the welcome email
pub(crate) const WELCOME_SUBJECT: &str = "Welcome to Penscribe!";

/// Render the welcome email body
pub(crate) fn welcome_html(name: &str) -> String {
    format!(
        "<p>Hi <strong>{name}</strong>,</p>\
         <p>Thank you for signing in to <strong>Penscribe</strong>!</p>\
         <p>We're excited to have you on board. Start creating stories with the generator today.</p>\
         <p><em>Tip: try different categories - Funny, Sad, Adventure, Horror, Romance, and Sci-Fi!</em></p>\
         <p>Best regards,<br><strong>The Penscribe Team</strong></p>"
    )
}

/// Welcome notification sender, selected by configuration
#[derive(Clone)]
pub enum WelcomeNotifier {
    /// Deliver through the Resend HTTP API
    Resend(ResendNotifier),
    /// Deliver through an SMTP relay
    Smtp(SmtpNotifier),
    /// No delivery configured; every send is a logged no-op
    Disabled,
}

impl WelcomeNotifier {
    /// Send the welcome notification
    ///
    /// Returns whether delivery was handed off successfully. Never
    /// errors: callers treat `false` as "log and move on".
    pub async fn send_welcome(&self, email: &str, name: &str) -> bool {
        match self {
            Self::Resend(notifier) => notifier.send(email, name).await,
            Self::Smtp(notifier) => notifier.send(email, name).await,
            Self::Disabled => {
                tracing::info!("Notification backend disabled; skipping welcome for {email}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_html_addresses_recipient() {
        let html = welcome_html("Alice");
        assert!(html.contains("<strong>Alice</strong>"));
        assert!(html.contains("Penscribe"));
    }

    #[tokio::test]
    async fn test_disabled_backend_is_false() {
        assert!(!WelcomeNotifier::Disabled.send_welcome("a@example.com", "A").await);
    }
}
