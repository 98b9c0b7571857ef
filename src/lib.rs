//! Library API
//!
//! A Rust-based microservice for managing books and their loans, following
//! Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
