//! Console runner behind the `migration` binary.

use colored::*;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

#[derive(Debug, Clone, Copy)]
pub enum Direction {
    Up,
    Down,
}

/// Runs every migration in the given direction, printing one status line each.
///
/// Stops at the first failure and returns its error.
pub async fn run_all_migrations(db: &DatabaseConnection, direction: Direction) -> Result<(), DbErr> {
    let schema_manager = SchemaManager::new(db);

    let mut migrations = <crate::Migrator as MigratorTrait>::migrations();
    if let Direction::Down = direction {
        migrations.reverse();
    }

    match direction {
        Direction::Up => println!("Running migrations..."),
        Direction::Down => println!("Reverting migrations..."),
    }

    for migration in migrations {
        run_migration(&schema_manager, migration, direction).await?;
    }
    Ok(())
}

async fn run_migration(
    schema_manager: &SchemaManager<'_>,
    migration: Box<dyn MigrationTrait>,
    direction: Direction,
) -> Result<(), DbErr> {
    let verb = match direction {
        Direction::Up => "Applying",
        Direction::Down => "Reverting",
    };
    let name_str = format!("{} {}", verb, migration.name().bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = match direction {
        Direction::Up => migration.up(schema_manager).await,
        Direction::Down => migration.down(schema_manager).await,
    };

    match result {
        Ok(()) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Err(err) => {
            println!("{}", "failed".red());
            Err(err)
        }
    }
}
