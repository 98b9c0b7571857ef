//! Data Transfer Objects
//!
//! Request and response DTOs for the REST API.

pub mod book;
pub mod loan;
pub mod page;

pub use book::{BookQueryDto, BookResponseDto, CreateBookDto, UpdateBookDto};
pub use loan::{CreateLoanDto, LoanCreatedDto, LoanQueryDto, LoanResponseDto, ReturnLoanDto};
pub use page::{PageDto, PageQueryDto};
