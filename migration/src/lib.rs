//! Schema for the `weather` table.
//!
//! The service does not track applied migrations. Every migration here is
//! written with `IF NOT EXISTS` / `IF EXISTS` so it can be replayed on each
//! startup without error or duplication.

use sea_orm::DatabaseConnection;
pub use sea_orm_migration::prelude::*;

pub mod migrations;
mod migrator;
pub mod runner;

pub use migrator::Migrator;

/// Applies every migration's `up` step directly through a `SchemaManager`.
///
/// Fails on the first statement error; callers treat that as fatal.
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let manager = SchemaManager::new(db);
    for migration in Migrator::migrations() {
        migration.up(&manager).await?;
    }
    Ok(())
}
