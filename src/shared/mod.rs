//! Shared Module
//!
//! Cross-cutting utilities and types used across the application.

pub mod errors;
pub mod request_id;

pub use errors::{ApiError, DomainError, EmailError, RepositoryError, UseCaseError};
pub use request_id::RequestId;
