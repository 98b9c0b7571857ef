//! Return Loan Use Case (PATCH)
//!
//! Sets the returned flag of a loan. Re-opening a loan must not leave the
//! book with two outstanding loans.

use std::sync::Arc;

use crate::domain::gateways::LoanRepository;
use crate::domain::models::loan::{Loan, LoanId};
use crate::shared::errors::{DomainError, RepositoryError, UseCaseError};

/// Use case for returning (or re-opening) a loan
pub struct ReturnLoanUseCase {
    loan_repository: Arc<dyn LoanRepository>,
}

impl ReturnLoanUseCase {
    /// Create a new ReturnLoanUseCase
    #[must_use]
    pub fn new(loan_repository: Arc<dyn LoanRepository>) -> Self {
        Self { loan_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the loan doesn't exist.
    /// Returns `DomainError::BookAlreadyLoaned` when re-opening a loan whose book is out again.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &LoanId, returned: bool) -> Result<Loan, UseCaseError> {
        tracing::info!(loan_id = %id, returned, "Updating loan returned flag");

        let existing = self.loan_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(loan_id = %id, "Loan not found for update");
            UseCaseError::not_found("Loan", id)
        })?;

        let reopening = existing.returned() && !returned;
        if reopening
            && self
                .loan_repository
                .exists_outstanding_by_book(existing.book().id())
                .await?
        {
            tracing::warn!(loan_id = %id, book_id = %existing.book().id(), "Cannot reopen loan, book is out");
            return Err(DomainError::BookAlreadyLoaned.into());
        }

        let updated = existing.with_returned(returned);

        let result = self
            .loan_repository
            .update(&updated)
            .await
            .map_err(|e| match e {
                RepositoryError::UniqueViolation(_) => UseCaseError::Domain(DomainError::BookAlreadyLoaned),
                other => other.into(),
            })?
            .ok_or_else(|| UseCaseError::not_found("Loan", id))?;

        tracing::info!(loan_id = %id, returned, "Loan updated successfully");
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockLoanRepository;
    use crate::domain::models::book::{Book, CreateBookData};
    use chrono::Utc;

    fn create_test_loan() -> Loan {
        let book = Book::new(CreateBookData {
            title: "Aventuras".to_string(),
            author: "Fulano".to_string(),
            isbn: "123".to_string(),
        });
        Loan::new(book, "Fulano".to_string(), None, Utc::now().date_naive())
    }

    #[tokio::test]
    async fn should_return_a_book() {
        let loan = create_test_loan();
        let id = *loan.id();

        let mut repo = MockLoanRepository::new();
        repo.expect_find_by_id().returning(move |_| Ok(Some(loan.clone())));
        repo.expect_exists_outstanding_by_book().never();
        repo.expect_update()
            .withf(|loan| loan.returned())
            .times(1)
            .returning(|loan| Ok(Some(loan.clone())));

        let use_case = ReturnLoanUseCase::new(Arc::new(repo));
        let updated = use_case.execute(&id, true).await.unwrap();

        assert!(updated.returned());
        assert_eq!(updated.id(), &id);
    }

    #[tokio::test]
    async fn should_return_not_found_for_nonexistent_loan() {
        let mut repo = MockLoanRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_update().never();

        let use_case = ReturnLoanUseCase::new(Arc::new(repo));
        let result = use_case.execute(&LoanId::new(), true).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_refuse_to_reopen_when_book_is_loaned_again() {
        let loan = create_test_loan().with_returned(true);
        let id = *loan.id();

        let mut repo = MockLoanRepository::new();
        repo.expect_find_by_id().returning(move |_| Ok(Some(loan.clone())));
        repo.expect_exists_outstanding_by_book().times(1).returning(|_| Ok(true));
        repo.expect_update().never();

        let use_case = ReturnLoanUseCase::new(Arc::new(repo));
        let result = use_case.execute(&id, false).await;

        assert!(matches!(
            result.unwrap_err(),
            UseCaseError::Domain(DomainError::BookAlreadyLoaned)
        ));
    }

    #[tokio::test]
    async fn should_reopen_when_book_is_available() {
        let loan = create_test_loan().with_returned(true);
        let id = *loan.id();

        let mut repo = MockLoanRepository::new();
        repo.expect_find_by_id().returning(move |_| Ok(Some(loan.clone())));
        repo.expect_exists_outstanding_by_book().returning(|_| Ok(false));
        repo.expect_update().returning(|loan| Ok(Some(loan.clone())));

        let use_case = ReturnLoanUseCase::new(Arc::new(repo));
        let updated = use_case.execute(&id, false).await.unwrap();

        assert!(!updated.returned());
    }
}
