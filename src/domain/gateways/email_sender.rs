//! Email Sender Gateway

use async_trait::async_trait;

use crate::shared::errors::EmailError;

/// Outbound e-mail port used for customer notifications
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send a plain-text message to a single recipient
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<(), EmailError>;
}
