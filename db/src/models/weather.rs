use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A stored observation in the `weather` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "weather")]
pub struct Model {
    /// Primary key ID (auto-incremented by the database).
    #[sea_orm(primary_key)]
    pub id: i32,
    pub city: String,
    /// Degrees Celsius.
    #[serde(rename = "temperature_c")]
    pub temperature: f64,
    /// Free-text label such as "Sunny".
    pub condition: String,
    /// Relative humidity, 0..100 by convention only.
    #[serde(rename = "humidity_pct")]
    pub humidity: i32,
    /// km/h
    #[serde(rename = "wind_speed_kmh")]
    pub wind_speed: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// An observation that has not been assigned an identifier.
///
/// Used for the seed rows and for the single record the static mode serves,
/// so it serializes with the same keys as `Model` minus `id`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Reading {
    pub city: &'static str,
    #[serde(rename = "temperature_c")]
    pub temperature: f64,
    pub condition: &'static str,
    #[serde(rename = "humidity_pct")]
    pub humidity: i32,
    #[serde(rename = "wind_speed_kmh")]
    pub wind_speed: f64,
}

impl Reading {
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: NotSet,
            city: Set(self.city.to_owned()),
            temperature: Set(self.temperature),
            condition: Set(self.condition.to_owned()),
            humidity: Set(self.humidity),
            wind_speed: Set(self.wind_speed),
        }
    }
}
