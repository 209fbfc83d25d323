pub mod seed;
pub mod seeds;

pub use seed::{SeedOutcome, Seeder, run_seeder};
pub use seeds::weather::{WEATHER_READINGS, WeatherSeeder, seed_if_empty};
