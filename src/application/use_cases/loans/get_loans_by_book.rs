//! Get Loans By Book Use Case
//!
//! Loan history of one book.

use std::sync::Arc;

use crate::domain::gateways::{BookRepository, LoanRepository};
use crate::domain::models::book::BookId;
use crate::domain::models::loan::Loan;
use crate::domain::models::page::{Page, PageRequest};
use crate::shared::errors::UseCaseError;

/// Use case for listing the loans of a book
pub struct GetLoansByBookUseCase {
    book_repository: Arc<dyn BookRepository>,
    loan_repository: Arc<dyn LoanRepository>,
}

impl GetLoansByBookUseCase {
    /// Create a new GetLoansByBookUseCase
    #[must_use]
    pub fn new(book_repository: Arc<dyn BookRepository>, loan_repository: Arc<dyn LoanRepository>) -> Self {
        Self {
            book_repository,
            loan_repository,
        }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the book doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, book_id: &BookId, page: PageRequest) -> Result<Page<Loan>, UseCaseError> {
        tracing::debug!(book_id = %book_id, "Getting loans of book");

        if self.book_repository.find_by_id(book_id).await?.is_none() {
            tracing::warn!(book_id = %book_id, "Book not found");
            return Err(UseCaseError::not_found("Book", book_id));
        }

        Ok(self.loan_repository.find_by_book(book_id, &page).await?)
    }
}
