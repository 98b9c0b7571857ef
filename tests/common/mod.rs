//! Common test utilities for e2e tests
//!
//! Spins up a PostgreSQL container, runs migrations and builds the
//! application router on top of it.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::PgPool;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tower::util::ServiceExt;

use library_api::infrastructure::driven_adapters::config::DatabaseConfig;
use library_api::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use library_api::infrastructure::driven_adapters::{PostgresBookRepository, PostgresLoanRepository};
use library_api::infrastructure::driving_adapters::api_rest::{self, AppState};

/// Test application context
pub struct TestApp {
    pub router: Router,
    pub pool: PgPool,
    _container: ContainerAsync<Postgres>,
}

impl TestApp {
    /// Create a new test application with a fresh PostgreSQL database
    pub async fn new() -> Self {
        let container = Postgres::default()
            .with_tag("16-alpine")
            .start()
            .await
            .expect("Failed to start PostgreSQL container");

        let host = container.get_host().await.expect("Failed to get host");
        let port = container
            .get_host_port_ipv4(5432)
            .await
            .expect("Failed to get port");

        let database = DatabaseConfig {
            url: format!("postgres://postgres:postgres@{host}:{port}/postgres"),
            max_connections: 5,
            min_connections: 1,
        };

        let pool = create_pool(&database)
            .await
            .expect("Failed to connect to test database");
        run_migrations(&pool).await.expect("Failed to run migrations");

        let book_repository = Arc::new(PostgresBookRepository::new(pool.clone()));
        let loan_repository = Arc::new(PostgresLoanRepository::new(pool.clone()));

        // No rate limiting in tests
        let router = api_rest::router(AppState::new(book_repository, loan_repository));

        Self {
            router,
            pool,
            _container: container,
        }
    }

    /// Send a request and return the status with the JSON body (`Null` when empty)
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    /// Create a book through the API and return it
    pub async fn create_book(&self, book: &CreateBookRequest) -> BookResponse {
        let (status, body) = self
            .request(Method::POST, "/api/books", Some(serde_json::to_value(book).unwrap()))
            .await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
        serde_json::from_value(body).unwrap()
    }

    /// Lend a book through the API and return the loan id
    pub async fn create_loan(&self, loan: &CreateLoanRequest) -> String {
        let (status, body) = self
            .request(Method::POST, "/api/loans", Some(serde_json::to_value(loan).unwrap()))
            .await;
        assert_eq!(status, StatusCode::CREATED, "unexpected body: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    /// Move a loan's start date into the past
    pub async fn backdate_loan(&self, loan_id: &str, days: i32) {
        sqlx::query("UPDATE loans SET loan_date = CURRENT_DATE - $2::int WHERE id = $1::uuid")
            .bind(loan_id)
            .bind(days)
            .execute(&self.pool)
            .await
            .expect("Failed to backdate loan");
    }
}

/// Helper struct for book request bodies
#[derive(Debug, Clone, Serialize)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

impl Default for CreateBookRequest {
    fn default() -> Self {
        Self {
            title: "Meu livro".to_string(),
            author: "Fulano".to_string(),
            isbn: "123".to_string(),
        }
    }
}

impl CreateBookRequest {
    pub fn with_isbn(mut self, isbn: &str) -> Self {
        self.isbn = isbn.to_string();
        self
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn with_author(mut self, author: &str) -> Self {
        self.author = author.to_string();
        self
    }
}

/// Helper struct for loan request bodies
#[derive(Debug, Clone, Serialize)]
pub struct CreateLoanRequest {
    pub isbn: String,
    pub customer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl CreateLoanRequest {
    pub fn new(isbn: &str, customer: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            customer: customer.to_string(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }
}

/// Book response structure for deserialization
#[derive(Debug, Clone, Deserialize)]
pub struct BookResponse {
    pub id: String,
    pub title: String,
    pub author: String,
    pub isbn: String,
}

/// Loan response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct LoanResponse {
    pub id: String,
    pub isbn: String,
    pub customer: String,
    pub email: Option<String>,
    pub loan_date: String,
    pub returned: bool,
    pub book: BookResponse,
}

/// Page response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
    pub page: u32,
    pub size: u32,
}

/// Error response structure for deserialization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
    pub request_id: Option<String>,
    pub timestamp: String,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub details: Option<Vec<FieldError>>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}
