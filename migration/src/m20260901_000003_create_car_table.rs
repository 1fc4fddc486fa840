use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000002_create_location_table::Location;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(string_len(Car::Make, 100))
                    .col(string_len(Car::Model, 100))
                    .col(integer(Car::Year))
                    .col(integer(Car::LocationId))
                    .col(string_len(Car::Status, 20).default("available"))
                    .col(string_len_uniq(Car::CarId, 20))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_location_id")
                            .from(Car::Table, Car::LocationId)
                            .to(Location::Table, Location::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_car_status")
                    .table(Car::Table)
                    .col(Car::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_car_status")
                    .table(Car::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    Make,
    Model,
    Year,
    LocationId,
    Status,
    CarId,
}
