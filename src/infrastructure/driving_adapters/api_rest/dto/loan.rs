//! Loan DTOs
//!
//! Data transfer objects for loan API endpoints.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::book::{non_blank, BookResponseDto};
use crate::domain::models::loan::{CreateLoanData, Loan, LoanFilter};

/// DTO for lending a book
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLoanDto {
    #[serde(default)]
    #[validate(length(min = 1, max = 17, message = "isbn must be between 1 and 17 characters"))]
    pub isbn: String,

    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "customer must be between 1 and 255 characters"))]
    pub customer: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
}

impl From<CreateLoanDto> for CreateLoanData {
    fn from(dto: CreateLoanDto) -> Self {
        Self {
            isbn: dto.isbn,
            customer: dto.customer,
            customer_email: dto.email,
        }
    }
}

/// DTO for marking a loan as returned (PATCH)
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnLoanDto {
    pub returned: bool,
}

/// Query parameters for searching loans
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoanQueryDto {
    pub isbn: Option<String>,
    pub customer: Option<String>,
}

impl From<LoanQueryDto> for LoanFilter {
    fn from(dto: LoanQueryDto) -> Self {
        Self {
            isbn: non_blank(dto.isbn),
            customer: non_blank(dto.customer),
        }
    }
}

/// Body returned when a loan is created
#[derive(Debug, Clone, Serialize)]
pub struct LoanCreatedDto {
    pub id: String,
}

/// Loan response DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResponseDto {
    pub id: String,
    pub isbn: String,
    pub customer: String,
    pub email: Option<String>,
    pub loan_date: NaiveDate,
    pub returned: bool,
    pub book: BookResponseDto,
}

impl From<Loan> for LoanResponseDto {
    fn from(loan: Loan) -> Self {
        Self {
            id: loan.id().to_string(),
            isbn: loan.book().isbn().to_string(),
            customer: loan.customer().to_string(),
            email: loan.customer_email().map(str::to_string),
            loan_date: loan.loan_date(),
            returned: loan.returned(),
            book: BookResponseDto::from(loan.book()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::book::{Book, CreateBookData};

    #[test]
    fn test_create_loan_dto_validation() {
        let valid = CreateLoanDto {
            isbn: "123".to_string(),
            customer: "Fulano".to_string(),
            email: Some("customer@email.com".to_string()),
        };
        assert!(valid.validate().is_ok());

        let without_email = CreateLoanDto {
            email: None,
            ..valid.clone()
        };
        assert!(without_email.validate().is_ok());

        let bad_email = CreateLoanDto {
            email: Some("not-an-email".to_string()),
            ..valid
        };
        assert!(bad_email.validate().is_err());

        assert_eq!(CreateLoanDto::default().validate().unwrap_err().field_errors().len(), 2);
    }

    #[test]
    fn test_loan_response_embeds_book() {
        let book = Book::new(CreateBookData {
            title: "Aventuras".to_string(),
            author: "Fulano".to_string(),
            isbn: "321".to_string(),
        });
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        let loan = Loan::new(book, "Ciclano".to_string(), None, date);

        let dto = LoanResponseDto::from(loan);
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["isbn"], "321");
        assert_eq!(json["book"]["title"], "Aventuras");
        assert_eq!(json["loanDate"], "2024-03-10");
        assert_eq!(json["returned"], false);
        assert!(json["email"].is_null());
    }
}
