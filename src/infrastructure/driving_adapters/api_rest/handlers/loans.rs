//! Loan Handlers
//!
//! HTTP handlers for lending books and returning them.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use uuid::Uuid;
use validator::Validate;

use crate::domain::models::loan::LoanId;
use crate::infrastructure::driving_adapters::api_rest::dto::{
    CreateLoanDto, LoanCreatedDto, LoanQueryDto, LoanResponseDto, PageDto, PageQueryDto, ReturnLoanDto,
};
use crate::infrastructure::driving_adapters::api_rest::extract::{AppJson, AppQuery};
use crate::infrastructure::driving_adapters::api_rest::AppState;
use crate::shared::errors::ApiError;

/// Create the router for loan endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(find_loans).post(create_loan))
        .route("/:id", get(get_loan_by_id).patch(return_loan))
}

fn parse_loan_id(id: &str) -> Result<LoanId, ApiError> {
    Ok(LoanId::from_uuid(Uuid::parse_str(id)?))
}

/// POST /api/loans - Lend a book to a customer
///
/// # Responses
///
/// * 201 Created - Loan created, body carries its id
/// * 400 Bad Request - Validation error, unknown ISBN or book already loaned
#[axum::debug_handler]
async fn create_loan(
    State(state): State<AppState>,
    AppJson(dto): AppJson<CreateLoanDto>,
) -> Result<(StatusCode, Json<LoanCreatedDto>), ApiError> {
    dto.validate()?;

    let loan = state.create_loan_use_case.execute(dto.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(LoanCreatedDto {
            id: loan.id().to_string(),
        }),
    ))
}

/// GET /api/loans - Search loans by ISBN or customer
///
/// # Responses
///
/// * 200 OK - Page of loans, newest first
#[axum::debug_handler]
async fn find_loans(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<LoanQueryDto>,
    AppQuery(page): AppQuery<PageQueryDto>,
) -> Result<Json<PageDto<LoanResponseDto>>, ApiError> {
    let loans = state.find_loans_use_case.execute(query.into(), page.into()).await?;

    Ok(Json(PageDto::from_page(loans, LoanResponseDto::from)))
}

/// GET /api/loans/:id - Get a loan by ID
///
/// # Responses
///
/// * 200 OK - Loan found
/// * 404 Not Found - Loan does not exist
#[axum::debug_handler]
async fn get_loan_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<LoanResponseDto>, ApiError> {
    let loan_id = parse_loan_id(&id)?;

    let loan = state.get_loan_by_id_use_case.execute(&loan_id).await?;

    Ok(Json(LoanResponseDto::from(loan)))
}

/// PATCH /api/loans/:id - Mark a loan as returned (or re-open it)
///
/// # Responses
///
/// * 200 OK - Loan updated
/// * 400 Bad Request - Re-opening while the book is loaned again
/// * 404 Not Found - Loan does not exist
#[axum::debug_handler]
async fn return_loan(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<ReturnLoanDto>,
) -> Result<Json<LoanResponseDto>, ApiError> {
    let loan_id = parse_loan_id(&id)?;

    let loan = state.return_loan_use_case.execute(&loan_id, dto.returned).await?;

    Ok(Json(LoanResponseDto::from(loan)))
}
