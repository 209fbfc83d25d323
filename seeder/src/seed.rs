use colored::*;
use sea_orm::{DatabaseConnection, DbErr};
use std::future::Future;
use std::io::{self, Write};
use std::pin::Pin;
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// What a seeding pass did to its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table already had rows; nothing was written.
    AlreadySeeded { existing: u64 },
    Seeded { inserted: usize },
}

pub trait Seeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<SeedOutcome, DbErr>> + Send + 'a>>;
}

/// Runs a seeder with a console status line (`done` / `skipped` / `failed`).
pub async fn run_seeder<S: Seeder + ?Sized>(
    seeder: &S,
    name: &str,
    db: &DatabaseConnection,
) -> Result<SeedOutcome, DbErr> {
    let base_msg = format!("Seeding {}", name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(base_msg.len()));
    print!("{}{} ", base_msg, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    let result = seeder.seed(db).await;
    let time_str = format!("({:.2?})", start.elapsed()).dimmed();

    match &result {
        Ok(SeedOutcome::Seeded { inserted }) => {
            println!("{} {} rows {}", "done".green(), inserted, time_str)
        }
        Ok(SeedOutcome::AlreadySeeded { existing }) => {
            println!("{} {} rows present {}", "skipped".yellow(), existing, time_str)
        }
        Err(_) => println!("{}", "failed".red()),
    }

    result
}
