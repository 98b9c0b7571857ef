//! Loan Domain Model
//!
//! A loan associates a book with a customer on a given date. A book has at
//! most one loan that is not yet returned.

use chrono::{Days, NaiveDate};
use uuid::Uuid;

use super::book::Book;

/// Newtype wrapper for Loan ID providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoanId(Uuid);

impl LoanId {
    /// Create a new random LoanId
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a LoanId from an existing UUID
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

impl Default for LoanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for LoanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Data required to register a new Loan
#[derive(Debug, Clone)]
pub struct CreateLoanData {
    pub isbn: String,
    pub customer: String,
    pub customer_email: Option<String>,
}

/// Loan search criteria. Set fields are combined with OR; an empty filter
/// matches every loan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoanFilter {
    pub isbn: Option<String>,
    pub customer: Option<String>,
}

/// Loan domain entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    id: LoanId,
    book: Book,
    customer: String,
    customer_email: Option<String>,
    loan_date: NaiveDate,
    returned: bool,
}

impl Loan {
    /// Open a new loan of `book` starting on `loan_date`
    #[must_use]
    pub fn new(book: Book, customer: String, customer_email: Option<String>, loan_date: NaiveDate) -> Self {
        Self {
            id: LoanId::new(),
            book,
            customer,
            customer_email,
            loan_date,
            returned: false,
        }
    }

    /// Restore a Loan from persisted data
    #[must_use]
    pub fn restore(
        id: LoanId,
        book: Book,
        customer: String,
        customer_email: Option<String>,
        loan_date: NaiveDate,
        returned: bool,
    ) -> Self {
        Self {
            id,
            book,
            customer,
            customer_email,
            loan_date,
            returned,
        }
    }

    /// Set the returned flag, returning a new instance
    #[must_use]
    pub fn with_returned(self, returned: bool) -> Self {
        Self { returned, ..self }
    }

    /// Whether the loan is still open after more than `late_after_days` days
    #[must_use]
    pub fn is_late(&self, today: NaiveDate, late_after_days: u64) -> bool {
        if self.returned {
            return false;
        }
        today
            .checked_sub_days(Days::new(late_after_days))
            .is_some_and(|limit| self.loan_date < limit)
    }

    #[must_use]
    pub fn id(&self) -> &LoanId {
        &self.id
    }

    #[must_use]
    pub fn book(&self) -> &Book {
        &self.book
    }

    #[must_use]
    pub fn customer(&self) -> &str {
        &self.customer
    }

    #[must_use]
    pub fn customer_email(&self) -> Option<&str> {
        self.customer_email.as_deref()
    }

    #[must_use]
    pub fn loan_date(&self) -> NaiveDate {
        self.loan_date
    }

    #[must_use]
    pub fn returned(&self) -> bool {
        self.returned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::book::CreateBookData;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_loan(loan_date: NaiveDate) -> Loan {
        let book = Book::new(CreateBookData {
            title: "Contos".to_string(),
            author: "Victor".to_string(),
            isbn: "1234".to_string(),
        });
        Loan::new(book, "Fulano".to_string(), Some("fulano@email.com".to_string()), loan_date)
    }

    #[test]
    fn test_new_loan_is_outstanding() {
        let loan = create_test_loan(date(2024, 3, 10));
        assert!(!loan.returned());
        assert_eq!(loan.customer(), "Fulano");
        assert_eq!(loan.customer_email(), Some("fulano@email.com"));
        assert_eq!(loan.book().isbn(), "1234");
    }

    #[test]
    fn test_with_returned() {
        let loan = create_test_loan(date(2024, 3, 10));
        let id = *loan.id();

        let returned = loan.with_returned(true);
        assert!(returned.returned());
        assert_eq!(returned.id(), &id);
    }

    #[test]
    fn test_is_late() {
        let today = date(2024, 3, 10);

        assert!(create_test_loan(date(2024, 3, 5)).is_late(today, 4));
        // exactly at the limit is still on time
        assert!(!create_test_loan(date(2024, 3, 6)).is_late(today, 4));
        assert!(!create_test_loan(today).is_late(today, 4));
    }

    #[test]
    fn test_returned_loan_is_never_late() {
        let loan = create_test_loan(date(2024, 1, 1)).with_returned(true);
        assert!(!loan.is_late(date(2024, 3, 10), 4));
    }
}
