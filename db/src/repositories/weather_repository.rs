//! Reads and writes for the `weather` table.

use crate::models::weather::{Entity as WeatherEntity, Model as WeatherModel, Reading};
use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait, QueryResult,
};

/// Maximum number of rows the listing returns.
pub const LIST_LIMIT: usize = 10;

fn listing_sql() -> String {
    format!(
        "SELECT id, city, temperature, condition, humidity, wind_speed \
         FROM weather ORDER BY id LIMIT {LIST_LIMIT}"
    )
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
    WeatherEntity::find().count(db).await
}

/// Inserts one reading and returns the identifier the database assigned.
pub async fn insert(db: &DatabaseConnection, reading: Reading) -> Result<i32, DbErr> {
    let res = WeatherEntity::insert(reading.into_active_model())
        .exec(db)
        .await?;
    Ok(res.last_insert_id)
}

/// Runs the listing query. Rows are returned undecoded so the caller can tell
/// a failing query apart from a row that does not fit `Model`.
pub async fn fetch_listing_rows(db: &DatabaseConnection) -> Result<Vec<QueryResult>, DbErr> {
    crate::query(db, &listing_sql(), vec![]).await
}

/// Decodes raw listing rows, stopping at the first row that does not fit.
pub fn decode_rows(rows: &[QueryResult]) -> Result<Vec<WeatherModel>, DbErr> {
    rows.iter()
        .map(|row| WeatherModel::from_query_result(row, ""))
        .collect()
}
