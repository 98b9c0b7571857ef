//! Create Loan Use Case
//!
//! Lends the book identified by an ISBN to a customer, starting today.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::gateways::{BookRepository, LoanRepository};
use crate::domain::models::loan::{CreateLoanData, Loan};
use crate::shared::errors::{DomainError, RepositoryError, UseCaseError};

/// Use case for registering a new loan
pub struct CreateLoanUseCase {
    book_repository: Arc<dyn BookRepository>,
    loan_repository: Arc<dyn LoanRepository>,
}

impl CreateLoanUseCase {
    /// Create a new CreateLoanUseCase
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
    /// Returns `DomainError::BookNotFoundForIsbn` if no book carries the ISBN.
    /// Returns `DomainError::BookAlreadyLoaned` if the book has an outstanding loan.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateLoanData) -> Result<Loan, UseCaseError> {
        tracing::info!(isbn = %data.isbn, customer = %data.customer, "Creating new loan");

        let book = self.book_repository.find_by_isbn(&data.isbn).await?.ok_or_else(|| {
            tracing::warn!(isbn = %data.isbn, "No book found for isbn");
            DomainError::BookNotFoundForIsbn
        })?;

        if self.loan_repository.exists_outstanding_by_book(book.id()).await? {
            tracing::warn!(book_id = %book.id(), "Book already loaned");
            return Err(DomainError::BookAlreadyLoaned.into());
        }

        let loan = Loan::new(book, data.customer, data.customer_email, Utc::now().date_naive());
        let created = self.loan_repository.create(&loan).await.map_err(|e| match e {
            RepositoryError::UniqueViolation(_) => UseCaseError::Domain(DomainError::BookAlreadyLoaned),
            other => other.into(),
        })?;

        tracing::info!(loan_id = %created.id(), book_id = %created.book().id(), "Loan created successfully");
        Ok(created)
    }
}
