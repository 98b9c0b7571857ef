//! Get Loan By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::LoanRepository;
use crate::domain::models::loan::{Loan, LoanId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a loan by ID
pub struct GetLoanByIdUseCase {
    loan_repository: Arc<dyn LoanRepository>,
}

impl GetLoanByIdUseCase {
    /// Create a new GetLoanByIdUseCase
    #[must_use]
    pub fn new(loan_repository: Arc<dyn LoanRepository>) -> Self {
        Self { loan_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the loan doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &LoanId) -> Result<Loan, UseCaseError> {
        tracing::debug!(loan_id = %id, "Getting loan by ID");

        self.loan_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(loan_id = %id, "Loan not found");
            UseCaseError::not_found("Loan", id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockLoanRepository;
    use crate::domain::models::book::{Book, CreateBookData};
    use chrono::Utc;
    use mockall::predicate::eq;

    fn create_test_loan() -> Loan {
        let book = Book::new(CreateBookData {
            title: "Aventuras".to_string(),
            author: "Fulano".to_string(),
            isbn: "123".to_string(),
        });
        Loan::new(book, "Fulano".to_string(), None, Utc::now().date_naive())
    }

    #[tokio::test]
    async fn should_obtain_loan_details() {
        let loan = create_test_loan();
        let id = *loan.id();
        let found = loan.clone();

        let mut repo = MockLoanRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .times(1)
            .returning(move |_| Ok(Some(found.clone())));

        let use_case = GetLoanByIdUseCase::new(Arc::new(repo));
        let result = use_case.execute(&id).await.unwrap();

        assert_eq!(result, loan);
    }

    #[tokio::test]
    async fn should_return_not_found_when_loan_does_not_exist() {
        let mut repo = MockLoanRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = GetLoanByIdUseCase::new(Arc::new(repo));
        let result = use_case.execute(&LoanId::new()).await;

        assert!(matches!(result.unwrap_err(), UseCaseError::NotFound { .. }));
    }
}
