//! Notify Late Loans Use Case
//!
//! Mails every customer whose loan has been outstanding for too long.

use std::sync::Arc;

use chrono::{Days, NaiveDate};

use crate::domain::gateways::{EmailSender, LoanRepository};
use crate::shared::errors::UseCaseError;

/// When a loan counts as late and what the reminder says
#[derive(Debug, Clone)]
pub struct LateLoanPolicy {
    /// Loans older than this many days are late
    pub late_after_days: u64,
    pub subject: String,
    pub message: String,
}

/// Use case for sending overdue reminders
pub struct NotifyLateLoansUseCase {
    loan_repository: Arc<dyn LoanRepository>,
    email_sender: Arc<dyn EmailSender>,
    policy: LateLoanPolicy,
}

impl NotifyLateLoansUseCase {
    /// Create a new NotifyLateLoansUseCase
    #[must_use]
    pub fn new(
        loan_repository: Arc<dyn LoanRepository>,
        email_sender: Arc<dyn EmailSender>,
        policy: LateLoanPolicy,
    ) -> Self {
        Self {
            loan_repository,
            email_sender,
            policy,
        }
    }

    /// Execute the use case, returning how many reminders were delivered
    ///
    /// Delivery failures are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if the late loans cannot be loaded.
    pub async fn execute(&self, today: NaiveDate) -> Result<usize, UseCaseError> {
        let Some(limit) = today.checked_sub_days(Days::new(self.policy.late_after_days)) else {
            return Ok(0);
        };

        let late_loans = self.loan_repository.find_outstanding_before(limit).await?;
        tracing::info!(count = late_loans.len(), %limit, "Found late loans");

        let mut sent = 0;
        for loan in late_loans
            .iter()
            .filter(|loan| loan.is_late(today, self.policy.late_after_days))
        {
            let Some(email) = loan.customer_email() else {
                tracing::debug!(loan_id = %loan.id(), "Late loan has no customer email");
                continue;
            };

            match self
                .email_sender
                .send(email, &self.policy.subject, &self.policy.message)
                .await
            {
                Ok(()) => sent += 1,
                Err(e) => tracing::warn!(loan_id = %loan.id(), error = %e, "Failed to send late loan reminder"),
            }
        }

        tracing::info!(sent, "Late loan reminders sent");
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::{MockEmailSender, MockLoanRepository};
    use crate::domain::models::book::{Book, CreateBookData};
    use crate::domain::models::loan::Loan;
    use crate::shared::errors::EmailError;
    use mockall::predicate::eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn late_loan(customer: &str, email: Option<&str>) -> Loan {
        let book = Book::new(CreateBookData {
            title: "Contos".to_string(),
            author: "Victor".to_string(),
            isbn: format!("isbn-{customer}"),
        });
        Loan::new(book, customer.to_string(), email.map(str::to_string), date(2024, 3, 1))
    }

    fn policy() -> LateLoanPolicy {
        LateLoanPolicy {
            late_after_days: 4,
            subject: "Overdue loan".to_string(),
            message: "Please return the book".to_string(),
        }
    }

    #[tokio::test]
    async fn should_mail_every_late_customer_with_an_email() {
        let mut loans = MockLoanRepository::new();
        loans
            .expect_find_outstanding_before()
            .with(eq(date(2024, 3, 6)))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    late_loan("Fulano", Some("fulano@email.com")),
                    late_loan("Ciclano", None),
                    late_loan("Beltrano", Some("beltrano@email.com")),
                ])
            });
        let mut sender = MockEmailSender::new();
        sender
            .expect_send()
            .withf(|_, subject, body| subject == "Overdue loan" && body == "Please return the book")
            .times(2)
            .returning(|_, _, _| Ok(()));

        let use_case = NotifyLateLoansUseCase::new(Arc::new(loans), Arc::new(sender), policy());
        let sent = use_case.execute(date(2024, 3, 10)).await.unwrap();

        assert_eq!(sent, 2);
    }

    #[tokio::test]
    async fn should_keep_going_when_a_send_fails() {
        let mut loans = MockLoanRepository::new();
        loans.expect_find_outstanding_before().returning(|_| {
            Ok(vec![
                late_loan("Fulano", Some("broken")),
                late_loan("Beltrano", Some("beltrano@email.com")),
            ])
        });
        let mut sender = MockEmailSender::new();
        sender
            .expect_send()
            .withf(|to, _, _| to == "broken")
            .returning(|to, _, _| Err(EmailError::Address(to.to_string())));
        sender
            .expect_send()
            .withf(|to, _, _| to == "beltrano@email.com")
            .returning(|_, _, _| Ok(()));

        let use_case = NotifyLateLoansUseCase::new(Arc::new(loans), Arc::new(sender), policy());
        let sent = use_case.execute(date(2024, 3, 10)).await.unwrap();

        assert_eq!(sent, 1);
    }

    #[tokio::test]
    async fn should_send_nothing_without_late_loans() {
        let mut loans = MockLoanRepository::new();
        loans.expect_find_outstanding_before().returning(|_| Ok(vec![]));
        let mut sender = MockEmailSender::new();
        sender.expect_send().never();

        let use_case = NotifyLateLoansUseCase::new(Arc::new(loans), Arc::new(sender), policy());

        assert_eq!(use_case.execute(date(2024, 3, 10)).await.unwrap(), 0);
    }
}
