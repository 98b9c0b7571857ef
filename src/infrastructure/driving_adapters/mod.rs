//! Driving Adapters
//!
//! Entry points that drive the application:
//! - HTTP REST API handlers
//! - Scheduled late loan reminders

pub mod api_rest;
pub mod scheduler;
