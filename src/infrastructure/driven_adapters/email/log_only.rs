use async_trait::async_trait;

use crate::domain::gateways::EmailSender;
use crate::shared::errors::EmailError;

/// Sender that writes messages to the log instead of delivering them
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError> {
        tracing::info!(to, subject, body, "Email not delivered (delivery disabled)");
        Ok(())
    }
}
