//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod book_repository;
pub mod email_sender;
pub mod loan_repository;

pub use book_repository::{BookDeletion, BookRepository};
pub use email_sender::EmailSender;
pub use loan_repository::LoanRepository;

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use email_sender::MockEmailSender;
#[cfg(test)]
pub use loan_repository::MockLoanRepository;
