//! Application state container shared across Axum route handlers.
//!
//! The state is built once during startup and handed to the router through
//! Axum's `State<T>` extractor.

use sea_orm::DatabaseConnection;

/// Central application state shared across the server.
///
/// Holds the process-wide database connection. `DatabaseConnection` is an
/// internally pooled handle, so cloning the state is cheap and every request
/// gets an independent checkout.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an already opened connection.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
