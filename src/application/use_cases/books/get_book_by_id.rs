//! Get Book By ID Use Case

use std::sync::Arc;

use crate::domain::gateways::BookRepository;
use crate::domain::models::book::{Book, BookId};
use crate::shared::errors::UseCaseError;

/// Use case for getting a book by ID
pub struct GetBookByIdUseCase {
    book_repository: Arc<dyn BookRepository>,
}

impl GetBookByIdUseCase {
    /// Create a new GetBookByIdUseCase
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
    pub async fn execute(&self, id: &BookId) -> Result<Book, UseCaseError> {
        tracing::debug!(book_id = %id, "Getting book by ID");

        let book = self.book_repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(book_id = %id, "Book not found");
            UseCaseError::not_found("Book", id)
        })?;

        Ok(book)
    }
}
