//! Email Sender Adapters
//!
//! - `SmtpEmailSender` delivers through an SMTP relay
//! - `LogEmailSender` only records messages in the log, for development

mod log_only;
mod smtp;

use std::sync::Arc;

pub use self::log_only::LogEmailSender;
pub use self::smtp::SmtpEmailSender;

use super::config::EmailConfig;
use crate::domain::gateways::EmailSender;
use crate::shared::errors::EmailError;

/// Pick the sender matching the configuration
///
/// # Errors
///
/// Returns `EmailError` when SMTP is enabled but cannot be set up.
pub fn build_email_sender(config: &EmailConfig) -> Result<Arc<dyn EmailSender>, EmailError> {
    if config.enabled {
        Ok(Arc::new(SmtpEmailSender::new(config)?))
    } else {
        tracing::info!("Email delivery disabled, reminders will only be logged");
        Ok(Arc::new(LogEmailSender))
    }
}
