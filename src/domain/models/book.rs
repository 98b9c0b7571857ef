//! Book Domain Model
//!
//! Represents a catalogued book, identified externally by its ISBN.

use uuid::Uuid;

/// Newtype wrapper for Book ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BookId(Uuid);

impl BookId {
    /// Create a new random BookId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a BookId from an existing UUID
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data required to create a new Book
#[derive(Debug, Clone)]
pub struct CreateBookData {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Data for updating an existing Book. The ISBN is immutable once saved.
#[derive(Debug, Clone)]
pub struct UpdateBookData {
    pub title: String,
    pub author: String,
}

/// Optional criteria for searching books; set fields are combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

/// Book domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    isbn: String,
}

impl Book {
    /// Create a new Book from creation data
    #[must_use]
    pub fn new(data: CreateBookData) -> Self {
        Self {
            id: BookId::new(),
            title: data.title,
            author: data.author,
            isbn: data.isbn,
        }
    }

    /// Restore a Book from persisted data
    #[must_use]
    pub fn restore(id: BookId, title: String, author: String, isbn: String) -> Self {
        Self {
            id,
            title,
            author,
            isbn,
        }
    }

    /// Apply updates to the book, returning a new instance
    #[must_use]
    pub fn with_updates(self, data: UpdateBookData) -> Self {
        Self {
            title: data.title,
            author: data.author,
            ..self
        }
    }

    #[must_use]
    pub fn id(&self) -> &BookId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    #[must_use]
    pub fn isbn(&self) -> &str {
        &self.isbn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_book() -> Book {
        Book::new(CreateBookData {
            title: "As aventuras".to_string(),
            author: "Fulano".to_string(),
            isbn: "123".to_string(),
        })
    }

    #[test]
    fn test_book_id_new() {
        assert_ne!(BookId::new(), BookId::new());
    }

    #[test]
    fn test_book_new() {
        let book = create_test_book();
        assert_eq!(book.title(), "As aventuras");
        assert_eq!(book.author(), "Fulano");
        assert_eq!(book.isbn(), "123");
    }

    #[test]
    fn test_book_with_updates_keeps_id_and_isbn() {
        let book = create_test_book();
        let id = *book.id();

        let updated = book.with_updates(UpdateBookData {
            title: "Outro titulo".to_string(),
            author: "Ciclano".to_string(),
        });

        assert_eq!(updated.id(), &id);
        assert_eq!(updated.isbn(), "123");
        assert_eq!(updated.title(), "Outro titulo");
        assert_eq!(updated.author(), "Ciclano");
    }
}
