//! Server bootstrap.
//!
//! Database mode opens and checks the connection, applies the schema, seeds
//! an empty table and only then builds the router. The static and echo modes
//! skip straight to the router. Any error returned from here is fatal.

use crate::routes::{Deployment, routes};
use axum::Router;
use sea_orm::DbErr;
use seeder::SeedOutcome;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;
use util::{
    config::{LISTEN_ADDR, ServiceMode},
    state::AppState,
};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("DB_URL is not set")]
    MissingDbUrl,
    #[error("open db: {0}")]
    Open(#[source] DbErr),
    #[error("ping db: {0}")]
    Ping(#[source] DbErr),
    #[error("migrate: {0}")]
    Migrate(#[source] DbErr),
    #[error("seed: {0}")]
    Seed(#[source] DbErr),
    #[error("bind {addr}: {source}")]
    Bind {
        addr: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("serve: {0}")]
    Serve(#[source] std::io::Error),
}

/// Connects, pings, migrates and seeds, in that order, stopping at the first failure.
pub async fn init_database(db_url: Option<&str>) -> Result<AppState, StartupError> {
    let url = db_url
        .filter(|url| !url.trim().is_empty())
        .ok_or(StartupError::MissingDbUrl)?;

    let db = db::connect(url).await.map_err(StartupError::Open)?;
    db::ping(&db).await.map_err(StartupError::Ping)?;
    info!("connected to database");

    migration::ensure_schema(&db)
        .await
        .map_err(StartupError::Migrate)?;

    match seeder::seed_if_empty(&db).await.map_err(StartupError::Seed)? {
        SeedOutcome::AlreadySeeded { existing } => {
            info!(existing, "weather table already seeded")
        }
        SeedOutcome::Seeded { .. } => {}
    }

    Ok(AppState::new(db))
}

/// Builds the router for `mode`, running the database startup sequence when needed.
pub async fn build_app(mode: ServiceMode, db_url: Option<&str>) -> Result<Router, StartupError> {
    let deployment = match mode {
        ServiceMode::Database => Deployment::Database(init_database(db_url).await?),
        ServiceMode::Static | ServiceMode::StaticQuiet => Deployment::Static,
        ServiceMode::Echo => Deployment::Echo,
    };

    Ok(routes(deployment, mode.logs_requests()))
}

/// Binds [`LISTEN_ADDR`] and serves until the process is killed.
pub async fn serve(app: Router) -> Result<(), StartupError> {
    let listener = TcpListener::bind(LISTEN_ADDR)
        .await
        .map_err(|source| StartupError::Bind {
            addr: LISTEN_ADDR,
            source,
        })?;

    info!("listening on :8080");
    axum::serve(listener, app).await.map_err(StartupError::Serve)
}
