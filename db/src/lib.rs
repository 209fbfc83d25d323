//! Data store adapter.
//!
//! Thin wrappers over a SeaORM `DatabaseConnection`: opening it, checking it
//! is alive, and running raw statements against whichever backend it points at.

pub mod models;
pub mod repositories;
pub mod test_utils;

use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, DbErr, ExecResult, QueryResult, Statement,
    Value,
};
use std::path::Path;

/// URL schemes handed to `Database::connect` unchanged.
const SUPPORTED_SCHEMES: &[&str] = &["sqlite", "postgres", "postgresql"];

/// Opens a connection from a DSN or a bare SQLite file path.
///
/// `postgres://` and `sqlite:` URLs are passed through as-is. Any other
/// `scheme://` URL is rejected, since no other driver is compiled in.
/// Anything without a scheme is treated as a SQLite file, created if missing.
pub async fn connect(path_or_url: &str) -> Result<DatabaseConnection, DbErr> {
    let url = if path_or_url.starts_with("sqlite:") {
        path_or_url.to_owned()
    } else if let Some((scheme, _)) = path_or_url.split_once("://") {
        if !SUPPORTED_SCHEMES.contains(&scheme) {
            return Err(DbErr::Custom(format!(
                "unsupported database url scheme `{scheme}`, expected postgres or sqlite"
            )));
        }
        path_or_url.to_owned()
    } else {
        // SQLite won't create intermediate dirs.
        if let Some(parent) = Path::new(path_or_url).parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        format!("sqlite://{path_or_url}?mode=rwc")
    };

    Database::connect(&url).await
}

/// Round-trips to the server to prove the connection is usable.
pub async fn ping(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.ping().await
}

/// Runs a read statement and returns the raw rows.
///
/// Placeholders follow the backend: `$1..$n` on PostgreSQL, `?` on SQLite.
pub async fn query(
    db: &DatabaseConnection,
    sql: &str,
    values: Vec<Value>,
) -> Result<Vec<QueryResult>, DbErr> {
    db.query_all(Statement::from_sql_and_values(
        db.get_database_backend(),
        sql,
        values,
    ))
    .await
}

/// Runs a write or DDL statement.
pub async fn exec(
    db: &DatabaseConnection,
    sql: &str,
    values: Vec<Value>,
) -> Result<ExecResult, DbErr> {
    db.execute(Statement::from_sql_and_values(
        db.get_database_backend(),
        sql,
        values,
    ))
    .await
}
