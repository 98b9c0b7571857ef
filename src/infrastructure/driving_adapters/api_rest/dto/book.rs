//! Book DTOs
//!
//! Data transfer objects for book API endpoints.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::book::{Book, BookFilter, CreateBookData, UpdateBookData};

lazy_static! {
    /// Digit groups separated by single hyphens, optionally ending in an X check digit
    static ref ISBN_REGEX: Regex = Regex::new(r"^[0-9]+(-[0-9]+)*(-?[Xx])?$").expect("valid regex");
}

/// Validates an ISBN format. Emptiness is reported by the length rule.
fn validate_isbn(isbn: &str) -> Result<(), validator::ValidationError> {
    if isbn.is_empty() || ISBN_REGEX.is_match(isbn) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("isbn");
        error.message = Some("isbn must contain only digits, hyphens and a trailing X".into());
        Err(error)
    }
}

/// Treat blank query values as absent
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// DTO for creating a new book
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "author must be between 1 and 255 characters"))]
    pub author: String,

    #[serde(default)]
    #[validate(
        length(min = 1, max = 17, message = "isbn must be between 1 and 17 characters"),
        custom(function = "validate_isbn")
    )]
    pub isbn: String,
}

impl From<CreateBookDto> for CreateBookData {
    fn from(dto: CreateBookDto) -> Self {
        Self {
            title: dto.title,
            author: dto.author,
            isbn: dto.isbn,
        }
    }
}

/// DTO for book update (PUT). The ISBN cannot be changed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "title must be between 1 and 255 characters"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "author must be between 1 and 255 characters"))]
    pub author: String,
}

impl From<UpdateBookDto> for UpdateBookData {
    fn from(dto: UpdateBookDto) -> Self {
        Self {
            title: dto.title,
            author: dto.author,
        }
    }
}

/// Query parameters for searching books
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookQueryDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
}

impl From<BookQueryDto> for BookFilter {
    fn from(dto: BookQueryDto) -> Self {
        Self {
            title: non_blank(dto.title),
            author: non_blank(dto.author),
            isbn: non_blank(dto.isbn),
        }
    }
}

/// Book response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponseDto {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl From<&Book> for BookResponseDto {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().to_string(),
            title: book.title().to_string(),
            author: book.author().to_string(),
            isbn: book.isbn().to_string(),
        }
    }
}

impl From<Book> for BookResponseDto {
    fn from(book: Book) -> Self {
        Self::from(&book)
    }
}
