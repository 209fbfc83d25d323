pub mod weather_repository;
