//! Book Repository Gateway
//!
//! Abstract trait defining the contract for book persistence operations.

use async_trait::async_trait;

use crate::domain::models::book::{Book, BookFilter, BookId};
use crate::domain::models::page::{Page, PageRequest};
use crate::shared::errors::RepositoryError;

/// Outcome of a delete attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookDeletion {
    Deleted,
    NotFound,
    /// The book has an outstanding loan and was kept
    CurrentlyLoaned,
}

/// Repository trait for Book persistence operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Find a book by its ID
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, RepositoryError>;

    /// Find a book by its ISBN (exact match)
    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, RepositoryError>;

    /// Check whether any book already uses the ISBN
    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, RepositoryError>;

    /// Persist a new book.
    ///
    /// Returns `RepositoryError::UniqueViolation` when the ISBN is taken.
    async fn create(&self, book: &Book) -> Result<Book, RepositoryError>;

    /// Update an existing book, `None` when it no longer exists
    async fn update(&self, book: &Book) -> Result<Option<Book>, RepositoryError>;

    /// Delete a book and its returned loans, unless it is out on loan.
    ///
    /// The loan check and the delete are atomic with respect to concurrent
    /// loan creation.
    async fn delete(&self, id: &BookId) -> Result<BookDeletion, RepositoryError>;

    /// Search books matching every set field of the filter
    async fn find(&self, filter: &BookFilter, page: &PageRequest) -> Result<Page<Book>, RepositoryError>;
}
