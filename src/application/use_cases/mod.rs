//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod books;
pub mod loans;

pub use books::{CreateBookUseCase, DeleteBookUseCase, FindBooksUseCase, GetBookByIdUseCase, UpdateBookUseCase};
pub use loans::{
    CreateLoanUseCase, FindLoansUseCase, GetLoanByIdUseCase, GetLoansByBookUseCase, LateLoanPolicy,
    NotifyLateLoansUseCase, ReturnLoanUseCase,
};
