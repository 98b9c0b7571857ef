//! Loan Repository Adapters

mod postgres;

pub use postgres::PostgresLoanRepository;
