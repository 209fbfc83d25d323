// migrations/m202510190001_create_weather.rs
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum Weather {
    Table,
    Id,
    City,
    Temperature,
    Condition,
    Humidity,
    WindSpeed,
}

pub struct Migration;

impl MigrationName for Migration {
    fn name(&self) -> &str {
        "m202510190001_create_weather"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Weather::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Weather::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Weather::City).text().not_null())
                    .col(ColumnDef::new(Weather::Temperature).double().not_null())
                    .col(ColumnDef::new(Weather::Condition).text().not_null())
                    .col(ColumnDef::new(Weather::Humidity).integer().not_null())
                    .col(ColumnDef::new(Weather::WindSpeed).double().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Weather::Table).if_exists().to_owned())
            .await
    }
}
