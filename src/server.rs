//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, service wiring, and the Axum
//! server lifecycle.

use crate::application::services::{
    CardHolderService, CreateCreditCardService, SearchCreditCardService,
};
use crate::config::Config;
use crate::infrastructure::credit_analysis::HttpCreditAnalysisClient;
use crate::infrastructure::persistence::{PgCardHolderRepository, PgCreditCardRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool and migrations
/// - Credit analysis HTTP client
/// - Application services and shared state
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migrations, server bind, or
/// server runtime fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await
        .context("failed to connect to database")?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    let pool = Arc::new(pool);
    let card_holder_repository = Arc::new(PgCardHolderRepository::new(pool.clone()));
    let credit_card_repository = Arc::new(PgCreditCardRepository::new(pool.clone()));
    let credit_analysis_client = Arc::new(HttpCreditAnalysisClient::new(
        config.credit_analysis_url.clone(),
    ));

    let card_holder_service = Arc::new(CardHolderService::new(
        credit_analysis_client,
        card_holder_repository.clone(),
    ));
    let create_credit_card_service = Arc::new(CreateCreditCardService::new(
        card_holder_repository,
        credit_card_repository.clone(),
    ));
    let search_credit_card_service =
        Arc::new(SearchCreditCardService::new(credit_card_repository));

    let state = AppState::new(
        card_holder_service,
        create_credit_card_service,
        search_credit_card_service,
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when Ctrl-C is received, triggering a graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install shutdown signal handler");
    }
    tracing::info!("Shutdown signal received");
}
