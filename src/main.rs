//! Library API - Main Entry Point

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use library_api::application::use_cases::{LateLoanPolicy, NotifyLateLoansUseCase};
use library_api::infrastructure::driven_adapters::config::{AppConfig, LoggingConfig};
use library_api::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use library_api::infrastructure::driven_adapters::email::build_email_sender;
use library_api::infrastructure::driven_adapters::{PostgresBookRepository, PostgresLoanRepository};
use library_api::infrastructure::driving_adapters::api_rest::{self, AppState};
use library_api::infrastructure::driving_adapters::scheduler::spawn_late_loan_notifier;

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    init_tracing(&config.logging);
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let book_repository = Arc::new(PostgresBookRepository::new(pool.clone()));
    let loan_repository = Arc::new(PostgresLoanRepository::new(pool));

    // Overdue reminders
    if config.loans.notifications_enabled {
        let email_sender = build_email_sender(&config.email)?;
        let notify_late_loans = Arc::new(NotifyLateLoansUseCase::new(
            loan_repository.clone(),
            email_sender,
            LateLoanPolicy {
                late_after_days: config.loans.late_after_days,
                subject: config.loans.late_subject.clone(),
                message: config.loans.late_message.clone(),
            },
        ));
        spawn_late_loan_notifier(
            notify_late_loans,
            Duration::from_secs(config.loans.notification_interval_secs.max(1)),
        );
    }

    let app_state = AppState::new(book_repository, loan_repository);

    // Per-IP rate limiting
    let governor_config = GovernorConfigBuilder::default()
        .per_second(config.rate_limit.requests_per_second)
        .burst_size(config.rate_limit.burst_size)
        .finish()
        .context("invalid rate limit configuration")?;

    let app = api_rest::router(app_state).layer(GovernorLayer {
        config: Arc::new(governor_config),
    });

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;

    Ok(())
}
