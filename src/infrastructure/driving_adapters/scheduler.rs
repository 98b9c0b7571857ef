//! Late Loan Scheduler
//!
//! Background task that periodically mails overdue reminders.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::application::use_cases::NotifyLateLoansUseCase;

/// Run one notification pass for the current UTC date
pub async fn notify_once(use_case: &NotifyLateLoansUseCase) {
    let today = Utc::now().date_naive();
    match use_case.execute(today).await {
        Ok(sent) => tracing::info!(sent, %today, "Late loan notification pass finished"),
        Err(e) => tracing::error!(error = %e, "Late loan notification pass failed"),
    }
}

/// Spawn the notifier; the first pass runs immediately
pub fn spawn_late_loan_notifier(use_case: Arc<NotifyLateLoansUseCase>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(interval_secs = every.as_secs(), "Late loan notifier started");

        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            notify_once(&use_case).await;
        }
    })
}
