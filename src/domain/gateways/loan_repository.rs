//! Loan Repository Gateway
//!
//! Abstract trait defining the contract for loan persistence operations.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::models::book::BookId;
use crate::domain::models::loan::{Loan, LoanFilter, LoanId};
use crate::domain::models::page::{Page, PageRequest};
use crate::shared::errors::RepositoryError;

/// Repository trait for Loan persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// Find a loan by its ID, with its book
    async fn find_by_id(&self, id: &LoanId) -> Result<Option<Loan>, RepositoryError>;

    /// Check whether the book has a loan that is not returned yet
    async fn exists_outstanding_by_book(&self, book_id: &BookId) -> Result<bool, RepositoryError>;

    /// Persist a new loan.
    ///
    /// Returns `RepositoryError::UniqueViolation` when the book already has
    /// an outstanding loan.
    async fn create(&self, loan: &Loan) -> Result<Loan, RepositoryError>;

    /// Update an existing loan, `None` when it no longer exists
    async fn update(&self, loan: &Loan) -> Result<Option<Loan>, RepositoryError>;

    /// Search loans by book ISBN or customer
    async fn find(&self, filter: &LoanFilter, page: &PageRequest) -> Result<Page<Loan>, RepositoryError>;

    /// All loans of one book, newest first
    async fn find_by_book(&self, book_id: &BookId, page: &PageRequest) -> Result<Page<Loan>, RepositoryError>;

    /// Outstanding loans that started strictly before `date`
    async fn find_outstanding_before(&self, date: NaiveDate) -> Result<Vec<Loan>, RepositoryError>;
}
