//! Find Books Use Case
//!
//! Paginated search over the catalogue.

use std::sync::Arc;

use crate::domain::gateways::BookRepository;
use crate::domain::models::book::{Book, BookFilter};
use crate::domain::models::page::{Page, PageRequest};
use crate::shared::errors::UseCaseError;

/// Use case for searching books
pub struct FindBooksUseCase {
    book_repository: Arc<dyn BookRepository>,
}

impl FindBooksUseCase {
    /// Create a new FindBooksUseCase
    #[must_use]
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, filter: BookFilter, page: PageRequest) -> Result<Page<Book>, UseCaseError> {
        tracing::debug!(?filter, page = page.page(), size = page.size(), "Finding books");

        let result = self.book_repository.find(&filter, &page).await?;

        tracing::debug!(count = result.items().len(), total = result.total(), "Found books");
        Ok(result)
    }
}
