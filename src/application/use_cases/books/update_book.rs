//! Update Book Use Case (PUT)
//!
//! Replaces the title and author of a book. The ISBN never changes.

use std::sync::Arc;

use crate::domain::gateways::BookRepository;
use crate::domain::models::book::{Book, BookId, UpdateBookData};
use crate::shared::errors::UseCaseError;

/// Use case for updating a book
pub struct UpdateBookUseCase {
    book_repository: Arc<dyn BookRepository>,
}

impl UpdateBookUseCase {
    /// Create a new UpdateBookUseCase
    #[must_use]
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::NotFound` if the book doesn't exist.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, id: &BookId, data: UpdateBookData) -> Result<Book, UseCaseError> {
        tracing::info!(book_id = %id, "Updating book");

        let existing = self.book_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(book_id = %id, "Book not found for update");
            UseCaseError::not_found("Book", id)
        })?;

        let updated = existing.with_updates(data);

        let result = self
            .book_repository
            .update(&updated)
            .await?
            .ok_or_else(|| UseCaseError::not_found("Book", id))?;

        tracing::info!(book_id = %id, "Book updated successfully");
        Ok(result)
    }
}
