//! Find Loans Use Case

use std::sync::Arc;

use crate::domain::gateways::LoanRepository;
use crate::domain::models::loan::{Loan, LoanFilter};
use crate::domain::models::page::{Page, PageRequest};
use crate::shared::errors::UseCaseError;

/// Use case for searching loans by book ISBN or customer
pub struct FindLoansUseCase {
    loan_repository: Arc<dyn LoanRepository>,
}

impl FindLoansUseCase {
    /// Create a new FindLoansUseCase
    #[must_use]
    pub fn new(loan_repository: Arc<dyn LoanRepository>) -> Self {
        Self { loan_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, filter: LoanFilter, page: PageRequest) -> Result<Page<Loan>, UseCaseError> {
        tracing::debug!(?filter, page = page.page(), size = page.size(), "Finding loans");

        let result = self.loan_repository.find(&filter, &page).await?;

        tracing::debug!(count = result.items().len(), total = result.total(), "Found loans");
        Ok(result)
    }
}
