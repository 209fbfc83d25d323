use crate::seed::{SeedOutcome, Seeder};
use db::models::weather::Reading;
use db::repositories::weather_repository;
use sea_orm::{DatabaseConnection, DbErr};
use std::future::Future;
use std::pin::Pin;
use tracing::info;

const fn reading(
    city: &'static str,
    temperature: f64,
    condition: &'static str,
    humidity: i32,
    wind_speed: f64,
) -> Reading {
    Reading {
        city,
        temperature,
        condition,
        humidity,
        wind_speed,
    }
}

/// Rows written into an empty `weather` table, in insertion order.
pub const WEATHER_READINGS: [Reading; 12] = [
    reading("Amsterdam", 7.4, "Partly cloudy", 78, 19.2),
    reading("London", 9.1, "Overcast", 82, 24.5),
    reading("Berlin", 3.2, "Snowing", 90, 11.0),
    reading("Paris", 11.0, "Sunny", 65, 15.3),
    reading("Madrid", 16.5, "Clear", 45, 8.7),
    reading("Rome", 14.2, "Sunny", 55, 10.1),
    reading("Vienna", 4.8, "Foggy", 88, 6.4),
    reading("Zurich", 2.1, "Snowing", 92, 9.3),
    reading("Brussels", 8.3, "Rainy", 85, 22.0),
    reading("Stockholm", -1.4, "Clear", 70, 13.6),
    reading("Oslo", -3.2, "Snowing", 75, 7.8),
    reading("Copenhagen", 5.5, "Cloudy", 80, 18.4),
];

/// Inserts `WEATHER_READINGS` if and only if the table has no rows.
///
/// Inserts run one at a time outside a transaction and the first failure
/// aborts the rest. A table left partially filled by an aborted run has a
/// nonzero count, so later runs treat it as seeded.
pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<SeedOutcome, DbErr> {
    let existing = weather_repository::count(db).await?;
    if existing > 0 {
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    for row in WEATHER_READINGS {
        weather_repository::insert(db, row).await?;
    }

    info!("seeded {} weather rows", WEATHER_READINGS.len());
    Ok(SeedOutcome::Seeded {
        inserted: WEATHER_READINGS.len(),
    })
}

pub struct WeatherSeeder;

impl Seeder for WeatherSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<SeedOutcome, DbErr>> + Send + 'a>> {
        Box::pin(seed_if_empty(db))
    }
}
