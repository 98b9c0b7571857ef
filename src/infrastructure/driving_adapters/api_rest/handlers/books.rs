//! Book Handlers
//!
//! HTTP handlers for book CRUD operations and the loans of a book.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::book::BookId;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    BookQueryDto, BookResponseDto, CreateBookDto, LoanResponseDto, PageDto, PageQueryDto, UpdateBookDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::{AppJson, AppQuery};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for book endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(find_books).post(create_book))
        .route("/:id", get(get_book_by_id).put(update_book).delete(delete_book))
        .route("/:id/loans", get(get_loans_by_book))
}

fn parse_book_id(id: &str) -> Result<BookId, ApiError> {
    Ok(BookId::from_uuid(Uuid::parse_str(id)?))
}

/// POST /api/books - Create a new book
///
/// # Responses
///
/// * 201 Created - Book created successfully
/// * 400 Bad Request - Validation error or duplicated ISBN
#[axum::debug_handler]
async fn create_book(
    State(state): State<AppState>,
    AppJson(dto): AppJson<CreateBookDto>,
) -> Result<(StatusCode, Json<BookResponseDto>), ApiError> {
    dto.validate()?;

    let book = state.create_book_use_case.execute(dto.into()).await?;

    Ok((StatusCode::CREATED, Json(BookResponseDto::from(book))))
}

/// GET /api/books - Search books by title, author or ISBN
///
/// # Responses
///
/// * 200 OK - Page of books ordered by title
#[axum::debug_handler]
async fn find_books(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<BookQueryDto>,
    AppQuery(page): AppQuery<PageQueryDto>,
) -> Result<Json<PageDto<BookResponseDto>>, ApiError> {
    let books = state.find_books_use_case.execute(query.into(), page.into()).await?;

    Ok(Json(PageDto::from_page(books, BookResponseDto::from)))
}

/// GET /api/books/:id - Get a book by ID
///
/// # Responses
///
/// * 200 OK - Book found
/// * 400 Bad Request - Malformed ID
/// * 404 Not Found - Book does not exist
#[axum::debug_handler]
async fn get_book_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BookResponseDto>, ApiError> {
    let book_id = parse_book_id(&id)?;

    let book = state.get_book_by_id_use_case.execute(&book_id).await?;

    Ok(Json(BookResponseDto::from(book)))
}

/// PUT /api/books/:id - Update title and author of a book
///
/// # Responses
///
/// * 200 OK - Book updated successfully
/// * 400 Bad Request - Validation error
/// * 404 Not Found - Book does not exist
#[axum::debug_handler]
async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<UpdateBookDto>,
) -> Result<Json<BookResponseDto>, ApiError> {
    dto.validate()?;

    let book_id = parse_book_id(&id)?;

    let book = state.update_book_use_case.execute(&book_id, dto.into()).await?;

    Ok(Json(BookResponseDto::from(book)))
}

/// DELETE /api/books/:id - Delete a book
///
/// # Responses
///
/// * 204 No Content - Book deleted successfully
/// * 400 Bad Request - The book is currently loaned
/// * 404 Not Found - Book does not exist
#[axum::debug_handler]
async fn delete_book(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    let book_id = parse_book_id(&id)?;

    state.delete_book_use_case.execute(&book_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/books/:id/loans - Loan history of a book
///
/// # Responses
///
/// * 200 OK - Page of loans, newest first
/// * 404 Not Found - Book does not exist
#[axum::debug_handler]
async fn get_loans_by_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppQuery(page): AppQuery<PageQueryDto>,
) -> Result<Json<PageDto<LoanResponseDto>>, ApiError> {
    let book_id = parse_book_id(&id)?;

    let loans = state.get_loans_by_book_use_case.execute(&book_id, page.into()).await?;

    Ok(Json(PageDto::from_page(loans, LoanResponseDto::from)))
}
