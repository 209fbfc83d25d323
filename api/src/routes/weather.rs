//! `GET /` handlers.
//!
//! The database deployment lists stored rows; the static deployments return
//! one fixed record and never touch a database.

use crate::error::ApiError;
use axum::{Json, extract::State};
use db::models::weather::{Model as WeatherModel, Reading};
use db::repositories::weather_repository;
use util::state::AppState;

/// The record served by the static deployments.
pub const STATIC_READING: Reading = Reading {
    city: "Amsterdam",
    temperature: 7.4,
    condition: "Partly cloudy",
    humidity: 78,
    wind_speed: 19.2,
};

/// GET /
///
/// Returns up to ten stored records ordered by ascending `id`, or `[]` when
/// the table is empty.
///
/// ### Responses
/// - `200 OK` with a JSON array
/// - `500 Internal Server Error`, plain text `db error` (query failed) or
///   `scan error` (a row could not be decoded)
///
/// ```json
/// [
///   {
///     "id": 1,
///     "city": "Amsterdam",
///     "temperature_c": 7.4,
///     "condition": "Partly cloudy",
///     "humidity_pct": 78,
///     "wind_speed_kmh": 19.2
///   }
/// ]
/// ```
pub async fn list_weather(
    State(state): State<AppState>,
) -> Result<Json<Vec<WeatherModel>>, ApiError> {
    let rows = weather_repository::fetch_listing_rows(state.db())
        .await
        .map_err(ApiError::Query)?;
    let records = weather_repository::decode_rows(&rows).map_err(ApiError::Scan)?;
    Ok(Json(records))
}

/// GET /
///
/// Always returns [`STATIC_READING`].
pub async fn static_weather() -> Json<Reading> {
    Json(STATIC_READING)
}
