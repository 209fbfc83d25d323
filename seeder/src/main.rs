use seeder::{WeatherSeeder, run_seeder};
use std::process;
use util::config;

#[tokio::main]
async fn main() {
    let Some(url) = config::db_url() else {
        eprintln!("DB_URL is not set");
        process::exit(1);
    };

    let db = match db::connect(&url).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("open db: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = migration::ensure_schema(&db).await {
        eprintln!("migrate: {err}");
        process::exit(1);
    }

    if let Err(err) = run_seeder(&WeatherSeeder, "Weather", &db).await {
        eprintln!("seed: {err}");
        process::exit(1);
    }
}
