//! PostgreSQL Book Repository Implementation
//!
//! Implements the BookRepository trait using SQLx for PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::{BookDeletion, BookRepository};
use crate::domain::models::book::{Book, BookFilter, BookId};
use crate::domain::models::page::{Page, PageRequest};
use crate::shared::errors::RepositoryError;

/// Database row representation for books table
#[derive(Debug, sqlx::FromRow)]
struct BookRow {
    id: Uuid,
    title: String,
    author: String,
    isbn: String,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book::restore(BookId::from_uuid(row.id), row.title, row.author, row.isbn)
    }
}

/// Wrap a user supplied fragment for a case-insensitive substring match
fn contains_pattern(value: Option<&str>) -> Option<String> {
    value.map(|v| {
        let escaped = v.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
        format!("%{escaped}%")
    })
}

/// PostgreSQL implementation of BookRepository
pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    /// Create a new PostgresBookRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, RepositoryError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, isbn
            FROM books
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Book::from))
    }

    async fn find_by_isbn(&self, isbn: &str) -> Result<Option<Book>, RepositoryError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, isbn
            FROM books
            WHERE isbn = $1
            "#,
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Book::from))
    }

    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM books WHERE isbn = $1
            )
            "#,
        )
        .bind(isbn)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, book: &Book) -> Result<Book, RepositoryError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            INSERT INTO books (id, title, author, isbn)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, author, isbn
            "#,
        )
        .bind(book.id().as_uuid())
        .bind(book.title())
        .bind(book.author())
        .bind(book.isbn())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        Ok(row.into())
    }

    async fn update(&self, book: &Book) -> Result<Option<Book>, RepositoryError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            UPDATE books
            SET title = $2,
                author = $3
            WHERE id = $1
            RETURNING id, title, author, isbn
            "#,
        )
        .bind(book.id().as_uuid())
        .bind(book.title())
        .bind(book.author())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Book::from))
    }

    async fn delete(&self, id: &BookId) -> Result<BookDeletion, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        // FOR UPDATE conflicts with the key-share lock taken by a loan insert,
        // so a loan is either visible below or fails its foreign key check.
        let locked = sqlx::query_scalar::<_, bool>("SELECT TRUE FROM books WHERE id = $1 FOR UPDATE")
            .bind(id.as_uuid())
            .fetch_optional(&mut *tx)
            .await?;
        if locked.is_none() {
            return Ok(BookDeletion::NotFound);
        }

        let loaned = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM loans WHERE book_id = $1 AND NOT returned
            )
            "#,
        )
        .bind(id.as_uuid())
        .fetch_one(&mut *tx)
        .await?;
        if loaned {
            return Ok(BookDeletion::CurrentlyLoaned);
        }

        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        Ok(BookDeletion::Deleted)
    }

    async fn find(&self, filter: &BookFilter, page: &PageRequest) -> Result<Page<Book>, RepositoryError> {
        let title = contains_pattern(filter.title.as_deref());
        let author = contains_pattern(filter.author.as_deref());
        let isbn = contains_pattern(filter.isbn.as_deref());

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM books
            WHERE ($1::text IS NULL OR title ILIKE $1)
              AND ($2::text IS NULL OR author ILIKE $2)
              AND ($3::text IS NULL OR isbn ILIKE $3)
            "#,
        )
        .bind(&title)
        .bind(&author)
        .bind(&isbn)
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT id, title, author, isbn
            FROM books
            WHERE ($1::text IS NULL OR title ILIKE $1)
              AND ($2::text IS NULL OR author ILIKE $2)
              AND ($3::text IS NULL OR isbn ILIKE $3)
            ORDER BY title ASC, id ASC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(&title)
        .bind(&author)
        .bind(&isbn)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total = u64::try_from(total).map_err(|e| RepositoryError::Mapping(format!("Invalid book count: {e}")))?;
        Ok(Page::new(rows.into_iter().map(Book::from).collect(), total, *page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_pattern_wraps_and_escapes() {
        assert_eq!(contains_pattern(None), None);
        assert_eq!(contains_pattern(Some("avent")), Some("%avent%".to_string()));
        assert_eq!(contains_pattern(Some("50%_off")), Some("%50\\%\\_off%".to_string()));
    }
}
