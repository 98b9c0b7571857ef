//! Domain Layer
//!
//! Contains the core business logic, domain models, and gateway traits (ports).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::{BookRepository, EmailSender, LoanRepository};
pub use models::{
    Book, BookFilter, BookId, CreateBookData, CreateLoanData, Loan, LoanFilter, LoanId, Page, PageRequest,
    UpdateBookData,
};
