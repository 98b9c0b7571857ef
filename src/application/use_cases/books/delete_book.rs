//! Delete Book Use Case
//!
//! Removes a book together with its returned loans. A book that is out on
//! loan stays in the catalogue.

use std::sync::Arc;

use crate::domain::gateways::{BookDeletion, BookRepository};
use crate::domain::models::book::BookId;
use crate::shared::errors::{DomainError, UseCaseError};

/// Use case for deleting a book
pub struct DeleteBookUseCase {
    book_repository: Arc<dyn BookRepository>,
}

impl DeleteBookUseCase {
    /// Create a new DeleteBookUseCase
    #[must_use]
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the book doesn't exist.
    /// Returns `DomainError::BookCurrentlyLoaned` if the book has an outstanding loan.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &BookId) -> Result<(), UseCaseError> {
        tracing::info!(book_id = %id, "Deleting book");

        match self.book_repository.delete(id).await? {
            BookDeletion::Deleted => {
                tracing::info!(book_id = %id, "Book deleted successfully");
                Ok(())
            }
            BookDeletion::NotFound => {
                tracing::warn!(book_id = %id, "Book not found for deletion");
                Err(UseCaseError::not_found("Book", id))
            }
            BookDeletion::CurrentlyLoaned => {
                tracing::warn!(book_id = %id, "Cannot delete a book that is on loan");
                Err(DomainError::BookCurrentlyLoaned.into())
            }
        }
    }
}
