use sea_orm::{Database, DatabaseConnection};

/// In-memory SQLite connection with the `weather` table already created.
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory db");

    migration::ensure_schema(&db)
        .await
        .expect("Failed to run migrations");

    db
}
