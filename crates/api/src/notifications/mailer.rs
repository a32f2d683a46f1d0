//! Mail delivery seam.
//!
//! Handlers build an [`OutgoingMail`] and hand it to the [`Mailer`] held in
//! `AppState`. The server binary installs [`LogMailer`]; integration tests
//! install [`MemoryMailer`] and read the links back out of it.

use std::sync::Mutex;

/// A plain-text message addressed to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl OutgoingMail {
    /// Message carrying the email-confirmation link.
    pub fn confirmation(to: &str, username: &str, link: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Confirm your email".to_string(),
            body: format!(
                "Hi {username},\n\nConfirm your email address by opening the link below:\n{link}\n"
            ),
        }
    }

    /// Message carrying the password-reset link.
    pub fn password_reset(to: &str, link: &str) -> Self {
        Self {
            to: to.to_string(),
            subject: "Reset your password".to_string(),
            body: format!(
                "A password reset was requested for this account.\n\
                 The link below is valid for 5 minutes:\n{link}\n\n\
                 If you did not request this, ignore this email.\n"
            ),
        }
    }

    /// The first `http(s)://` URL in the body, if any.
    pub fn link(&self) -> Option<&str> {
        let start = self.body.find("http")?;
        self.body[start..].split_whitespace().next()
    }
}

/// Delivers account mail. Delivery is fire-and-forget; failures are logged
/// by the implementation and never fail the request.
pub trait Mailer: Send + Sync {
    fn send(&self, mail: OutgoingMail);
}

/// Writes each message to the log instead of delivering it.
#[derive(Debug, Default)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, mail: OutgoingMail) {
        tracing::info!(
            to = %mail.to,
            subject = %mail.subject,
            body = %mail.body,
            "Outgoing mail",
        );
    }
}

/// Keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<OutgoingMail>>,
}

impl MemoryMailer {
    /// Snapshot of all messages sent so far, oldest first.
    pub fn sent(&self) -> Vec<OutgoingMail> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    /// The most recent message sent to `to`.
    pub fn last_to(&self, to: &str) -> Option<OutgoingMail> {
        self.sent().into_iter().rev().find(|m| m.to == to)
    }
}

impl Mailer for MemoryMailer {
    fn send(&self, mail: OutgoingMail) {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(mail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_is_extracted_from_body() {
        let mail = OutgoingMail::confirmation(
            "a@b.test",
            "ana",
            "http://localhost:3001/confirm-email/abc.def",
        );
        assert_eq!(mail.link(), Some("http://localhost:3001/confirm-email/abc.def"));
    }

    #[test]
    fn memory_mailer_records_in_order() {
        let mailer = MemoryMailer::default();
        mailer.send(OutgoingMail::password_reset("x@y.test", "http://h/1"));
        mailer.send(OutgoingMail::password_reset("x@y.test", "http://h/2"));

        assert_eq!(mailer.sent().len(), 2);
        assert_eq!(
            mailer.last_to("x@y.test").and_then(|m| m.link().map(String::from)),
            Some("http://h/2".to_string())
        );
        assert!(mailer.last_to("nobody@y.test").is_none());
    }
}
