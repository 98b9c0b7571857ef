//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::{
    CreateBookUseCase, CreateLoanUseCase, DeleteBookUseCase, FindBooksUseCase, FindLoansUseCase, GetBookByIdUseCase,
    GetLoanByIdUseCase, GetLoansByBookUseCase, ReturnLoanUseCase, UpdateBookUseCase,
};
use crate::domain::gateways::{BookRepository, LoanRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub create_book_use_case: Arc<CreateBookUseCase>,
    pub get_book_by_id_use_case: Arc<GetBookByIdUseCase>,
    pub update_book_use_case: Arc<UpdateBookUseCase>,
    pub delete_book_use_case: Arc<DeleteBookUseCase>,
    pub find_books_use_case: Arc<FindBooksUseCase>,
    pub create_loan_use_case: Arc<CreateLoanUseCase>,
    pub get_loan_by_id_use_case: Arc<GetLoanByIdUseCase>,
    pub return_loan_use_case: Arc<ReturnLoanUseCase>,
    pub find_loans_use_case: Arc<FindLoansUseCase>,
    pub get_loans_by_book_use_case: Arc<GetLoansByBookUseCase>,
}

impl AppState {
    /// Wire every use case to the given repositories
    pub fn new(book_repository: Arc<dyn BookRepository>, loan_repository: Arc<dyn LoanRepository>) -> Self {
        Self {
            create_book_use_case: Arc::new(CreateBookUseCase::new(book_repository.clone())),
            get_book_by_id_use_case: Arc::new(GetBookByIdUseCase::new(book_repository.clone())),
            update_book_use_case: Arc::new(UpdateBookUseCase::new(book_repository.clone())),
            delete_book_use_case: Arc::new(DeleteBookUseCase::new(book_repository.clone())),
            find_books_use_case: Arc::new(FindBooksUseCase::new(book_repository.clone())),
            create_loan_use_case: Arc::new(CreateLoanUseCase::new(
                book_repository.clone(),
                loan_repository.clone(),
            )),
            get_loan_by_id_use_case: Arc::new(GetLoanByIdUseCase::new(loan_repository.clone())),
            return_loan_use_case: Arc::new(ReturnLoanUseCase::new(loan_repository.clone())),
            find_loans_use_case: Arc::new(FindLoansUseCase::new(loan_repository.clone())),
            get_loans_by_book_use_case: Arc::new(GetLoansByBookUseCase::new(book_repository, loan_repository)),
        }
    }
}

/// Build the HTTP router with tracing, CORS and request IDs
///
/// Rate limiting is layered on by the binary since it needs the peer address.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/books", handlers::books::router())
        .nest("/api/loans", handlers::loans::router())
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .with_state(state)
}
