//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - Database repositories
//! - Configuration
//! - Email delivery

pub mod book_repository;
pub mod config;
pub mod database;
pub mod email;
pub mod loan_repository;

pub use book_repository::PostgresBookRepository;
pub use config::AppConfig;
pub use loan_repository::PostgresLoanRepository;
