//! Loan Use Cases
//!
//! Business logic for lending books to customers.

mod create_loan;
mod find_loans;
mod get_loan_by_id;
mod get_loans_by_book;
mod notify_late_loans;
mod return_loan;

pub use create_loan::CreateLoanUseCase;
pub use find_loans::FindLoansUseCase;
pub use get_loan_by_id::GetLoanByIdUseCase;
pub use get_loans_by_book::GetLoansByBookUseCase;
pub use notify_late_loans::{LateLoanPolicy, NotifyLateLoansUseCase};
pub use return_loan::ReturnLoanUseCase;
