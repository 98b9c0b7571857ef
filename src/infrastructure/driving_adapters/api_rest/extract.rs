//! Extractors whose rejections are rendered as `ApiError`
//!
//! Malformed JSON bodies or query strings answer with the same
//! `VALIDATION_ERROR` envelope as DTO validation failures.

use axum::extract::{FromRequest, FromRequestParts};

use crate::shared::errors::ApiError;

/// JSON request body
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);

/// Query string parameters
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct AppQuery<T>(pub T);
