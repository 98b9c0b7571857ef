//! Domain Models
//!
//! Pure domain entities and value objects representing business concepts.

pub mod book;
pub mod loan;
pub mod page;

pub use book::{Book, BookFilter, BookId, CreateBookData, UpdateBookData};
pub use loan::{CreateLoanData, Loan, LoanFilter, LoanId};
pub use page::{Page, PageRequest};
