//! SMTP delivery through lettre

use std::str::FromStr;

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{SmtpTransport, Transport};

use crate::domain::gateways::EmailSender;
use crate::infrastructure::driven_adapters::config::EmailConfig;
use crate::shared::errors::EmailError;

/// Sender backed by an SMTP relay
#[derive(Clone)]
pub struct SmtpEmailSender {
    from: Mailbox,
    mailer: SmtpTransport,
}

impl SmtpEmailSender {
    /// Build the transport from configuration
    ///
    /// # Errors
    ///
    /// Returns `EmailError` for an invalid sender address or relay host.
    pub fn new(config: &EmailConfig) -> Result<Self, EmailError> {
        let from = Mailbox::from_str(&config.from).map_err(|e| EmailError::Address(format!("{}: {e}", config.from)))?;

        let builder = if config.smtp_use_tls {
            SmtpTransport::starttls_relay(&config.smtp_host).map_err(|e| EmailError::Transport(e.to_string()))?
        } else {
            SmtpTransport::builder_dangerous(&config.smtp_host)
        }
        .port(config.smtp_port);

        let builder = match (&config.smtp_username, &config.smtp_password) {
            (Some(username), Some(password)) => builder.credentials(Credentials::new(username.clone(), password.clone())),
            _ => builder,
        };

        Ok(Self {
            from,
            mailer: builder.build(),
        })
    }

    fn build_message(&self, to: &str, subject: &str, body: &str) -> Result<Message, EmailError> {
        let to_mailbox = Mailbox::from_str(to).map_err(|e| EmailError::Address(format!("{to}: {e}")))?;

        Message::builder()
            .from(self.from.clone())
            .to(to_mailbox)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| EmailError::Build(e.to_string()))
    }
}

#[async_trait]
impl EmailSender for SmtpEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        let message = self.build_message(to, subject, body)?;
        let mailer = self.mailer.clone();

        // lettre's SmtpTransport blocks on network I/O
        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(|e| EmailError::Transport(e.to_string()))?
            .map_err(|e| EmailError::Transport(e.to_string()))?;

        tracing::debug!(to, subject, "Email sent");
        Ok(())
    }
}
