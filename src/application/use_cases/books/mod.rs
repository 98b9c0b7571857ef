//! Book Use Cases
//!
//! Business logic for managing the book catalogue.

mod create_book;
mod delete_book;
mod find_books;
mod get_book_by_id;
mod update_book;

pub use create_book::CreateBookUseCase;
pub use delete_book::DeleteBookUseCase;
pub use find_books::FindBooksUseCase;
pub use get_book_by_id::GetBookByIdUseCase;
pub use update_book::UpdateBookUseCase;
