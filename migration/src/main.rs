use migration::runner::{self, Direction};
use std::{env, process};
use util::config;

#[tokio::main]
async fn main() {
    let Some(url) = config::db_url() else {
        eprintln!("DB_URL is not set");
        process::exit(1);
    };

    let db = match sea_orm::Database::connect(&url).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("open db: {err}");
            process::exit(1);
        }
    };

    let args: Vec<String> = env::args().collect();
    let steps: &[Direction] = match args.get(1).map(|s| s.as_str()) {
        Some("down") => &[Direction::Down],
        Some("fresh") => &[Direction::Down, Direction::Up],
        Some("up") | None => &[Direction::Up],
        Some(other) => {
            eprintln!("unknown command `{other}`, expected one of: up, down, fresh");
            process::exit(2);
        }
    };

    for step in steps {
        if let Err(err) = runner::run_all_migrations(&db, *step).await {
            eprintln!("migrate: {err}");
            process::exit(1);
        }
    }
}
