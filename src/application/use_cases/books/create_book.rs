//! Create Book Use Case
//!
//! Registers a new book in the catalogue.

use std::sync::Arc;

use crate::domain::gateways::BookRepository;
use crate::domain::models::book::{Book, CreateBookData};
use crate::shared::errors::{DomainError, RepositoryError, UseCaseError};

/// Use case for creating a new book
pub struct CreateBookUseCase {
    book_repository: Arc<dyn BookRepository>,
}

impl CreateBookUseCase {
    /// Create a new CreateBookUseCase
    #[must_use]
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicatedIsbn` if a book with the same ISBN already exists.
    /// Returns `UseCaseError::Repository` if there's a database error.
    pub async fn execute(&self, data: CreateBookData) -> Result<Book, UseCaseError> {
        tracing::info!(isbn = %data.isbn, title = %data.title, "Creating new book");

        if self.book_repository.exists_by_isbn(&data.isbn).await? {
            tracing::warn!(isbn = %data.isbn, "Book with isbn already exists");
            return Err(DomainError::DuplicatedIsbn.into());
        }

        let book = Book::new(data);
        // a concurrent insert of the same isbn loses on the unique index
        let created = self.book_repository.create(&book).await.map_err(|e| match e {
            RepositoryError::UniqueViolation(_) => UseCaseError::Domain(DomainError::DuplicatedIsbn),
            other => other.into(),
        })?;

        tracing::info!(book_id = %created.id(), isbn = %created.isbn(), "Book created successfully");

        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockBookRepository;

    fn create_test_data() -> CreateBookData {
        CreateBookData {
            title: "As aventuras".to_string(),
            author: "Artur".to_string(),
            isbn: "001".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_book_when_isbn_is_free() {
        let mut repo = MockBookRepository::new();
        repo.expect_exists_by_isbn()
            .withf(|isbn| isbn == "001")
            .times(1)
            .returning(|_| Ok(false));
        repo.expect_create().times(1).returning(|book| Ok(book.clone()));

        let use_case = CreateBookUseCase::new(Arc::new(repo));
        let book = use_case.execute(create_test_data()).await.unwrap();

        assert_eq!(book.isbn(), "001");
        assert_eq!(book.title(), "As aventuras");
        assert_eq!(book.author(), "Artur");
    }

    #[tokio::test]
    async fn should_reject_duplicated_isbn_without_saving() {
        let mut repo = MockBookRepository::new();
        repo.expect_exists_by_isbn().returning(|_| Ok(true));
        repo.expect_create().never();

        let use_case = CreateBookUseCase::new(Arc::new(repo));
        let err = use_case.execute(create_test_data()).await.unwrap_err();

        assert!(matches!(err, UseCaseError::Domain(DomainError::DuplicatedIsbn)));
        assert_eq!(err.to_string(), "Cannot save duplicated Isbn");
    }

    #[tokio::test]
    async fn should_translate_unique_violation_into_duplicated_isbn() {
        let mut repo = MockBookRepository::new();
        repo.expect_exists_by_isbn().returning(|_| Ok(false));
        repo.expect_create()
            .returning(|_| Err(RepositoryError::UniqueViolation("books_isbn_key".to_string())));

        let use_case = CreateBookUseCase::new(Arc::new(repo));
        let err = use_case.execute(create_test_data()).await.unwrap_err();

        assert!(matches!(err, UseCaseError::Domain(DomainError::DuplicatedIsbn)));
    }
}
