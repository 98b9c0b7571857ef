//! HTTP Handlers
//!
//! Request handlers grouped by resource.

pub mod books;
pub mod health;
pub mod loans;
