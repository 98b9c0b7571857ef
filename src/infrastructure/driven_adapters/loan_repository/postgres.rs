//! PostgreSQL Loan Repository Implementation
//!
//! Loans are always read joined with their book.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::gateways::LoanRepository;
use crate::domain::models::book::{Book, BookId};
use crate::domain::models::loan::{Loan, LoanFilter, LoanId};
use crate::domain::models::page::{Page, PageRequest};
use crate::shared::errors::RepositoryError;

/// Columns selected for every loan query, aliased for `LoanRow`
const LOAN_COLUMNS: &str = r#"
    l.id, l.customer, l.customer_email, l.loan_date, l.returned,
    b.id AS book_id, b.title AS book_title, b.author AS book_author, b.isbn AS book_isbn
"#;

/// Database row representation for a loan joined with its book
#[derive(Debug, sqlx::FromRow)]
struct LoanRow {
    id: Uuid,
    customer: String,
    customer_email: Option<String>,
    loan_date: NaiveDate,
    returned: bool,
    book_id: Uuid,
    book_title: String,
    book_author: String,
    book_isbn: String,
}

impl From<LoanRow> for Loan {
    fn from(row: LoanRow) -> Self {
        let book = Book::restore(BookId::from_uuid(row.book_id), row.book_title, row.book_author, row.book_isbn);
        Loan::restore(
            LoanId::from_uuid(row.id),
            book,
            row.customer,
            row.customer_email,
            row.loan_date,
            row.returned,
        )
    }
}

fn to_total(count: i64) -> Result<u64, RepositoryError> {
    u64::try_from(count).map_err(|e| RepositoryError::Mapping(format!("Invalid loan count: {e}")))
}

/// PostgreSQL implementation of LoanRepository
pub struct PostgresLoanRepository {
    pool: PgPool,
}

impl PostgresLoanRepository {
    /// Create a new PostgresLoanRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LoanRepository for PostgresLoanRepository {
    async fn find_by_id(&self, id: &LoanId) -> Result<Option<Loan>, RepositoryError> {
        let sql = format!(
            "SELECT {LOAN_COLUMNS}
             FROM loans l
             JOIN books b ON b.id = l.book_id
             WHERE l.id = $1"
        );
        let row = sqlx::query_as::<_, LoanRow>(&sql)
            .bind(id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Loan::from))
    }

    async fn exists_outstanding_by_book(&self, book_id: &BookId) -> Result<bool, RepositoryError> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM loans WHERE book_id = $1 AND NOT returned
            )
            "#,
        )
        .bind(book_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create(&self, loan: &Loan) -> Result<Loan, RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO loans (id, book_id, customer, customer_email, loan_date, returned)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(loan.id().as_uuid())
        .bind(loan.book().id().as_uuid())
        .bind(loan.customer())
        .bind(loan.customer_email())
        .bind(loan.loan_date())
        .bind(loan.returned())
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        self.find_by_id(loan.id())
            .await?
            .ok_or_else(|| RepositoryError::NotFound(format!("Loan {} vanished after insert", loan.id())))
    }

    async fn update(&self, loan: &Loan) -> Result<Option<Loan>, RepositoryError> {
        let result = sqlx::query(
            r#"
            UPDATE loans
            SET customer = $2,
                customer_email = $3,
                returned = $4
            WHERE id = $1
            "#,
        )
        .bind(loan.id().as_uuid())
        .bind(loan.customer())
        .bind(loan.customer_email())
        .bind(loan.returned())
        .execute(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_by_id(loan.id()).await
    }

    async fn find(&self, filter: &LoanFilter, page: &PageRequest) -> Result<Page<Loan>, RepositoryError> {
        const CONDITION: &str = "($1::text IS NULL AND $2::text IS NULL) OR b.isbn = $1 OR l.customer = $2";

        let total = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*)
             FROM loans l
             JOIN books b ON b.id = l.book_id
             WHERE {CONDITION}"
        ))
        .bind(filter.isbn.as_deref())
        .bind(filter.customer.as_deref())
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, LoanRow>(&format!(
            "SELECT {LOAN_COLUMNS}
             FROM loans l
             JOIN books b ON b.id = l.book_id
             WHERE {CONDITION}
             ORDER BY l.loan_date DESC, l.id ASC
             LIMIT $3 OFFSET $4"
        ))
        .bind(filter.isbn.as_deref())
        .bind(filter.customer.as_deref())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(rows.into_iter().map(Loan::from).collect(), to_total(total)?, *page))
    }

    async fn find_by_book(&self, book_id: &BookId, page: &PageRequest) -> Result<Page<Loan>, RepositoryError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM loans WHERE book_id = $1")
            .bind(book_id.as_uuid())
            .fetch_one(&self.pool)
            .await?;

        let rows = sqlx::query_as::<_, LoanRow>(&format!(
            "SELECT {LOAN_COLUMNS}
             FROM loans l
             JOIN books b ON b.id = l.book_id
             WHERE l.book_id = $1
             ORDER BY l.loan_date DESC, l.id ASC
             LIMIT $2 OFFSET $3"
        ))
        .bind(book_id.as_uuid())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        Ok(Page::new(rows.into_iter().map(Loan::from).collect(), to_total(total)?, *page))
    }

    async fn find_outstanding_before(&self, date: NaiveDate) -> Result<Vec<Loan>, RepositoryError> {
        let rows = sqlx::query_as::<_, LoanRow>(&format!(
            "SELECT {LOAN_COLUMNS}
             FROM loans l
             JOIN books b ON b.id = l.book_id
             WHERE NOT l.returned AND l.loan_date < $1
             ORDER BY l.loan_date ASC"
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Loan::from).collect())
    }
}
