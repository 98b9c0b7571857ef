//! Book Repository Adapters

mod postgres;

pub use postgres::PostgresBookRepository;
