use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260901_000001_create_user_table::User, m20260901_000003_create_car_table::Car,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rental::Table)
                    .if_not_exists()
                    .col(pk_auto(Rental::Id))
                    .col(integer(Rental::UserId))
                    .col(integer(Rental::CarId))
                    .col(timestamp_with_time_zone(Rental::StartDate))
                    .col(timestamp_with_time_zone(Rental::EndDate))
                    .col(string_len(Rental::Status, 20).default("active"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_user_id")
                            .from(Rental::Table, Rental::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rental_car_id")
                            .from(Rental::Table, Rental::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Availability lookups filter on car + status
        manager
            .create_index(
                Index::create()
                    .name("idx_rental_car_id_status")
                    .table(Rental::Table)
                    .col(Rental::CarId)
                    .col(Rental::Status)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rental_start_date")
                    .table(Rental::Table)
                    .col(Rental::StartDate)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_rental_start_date")
                    .table(Rental::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_rental_car_id_status")
                    .table(Rental::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Rental::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rental {
    Table,
    Id,
    UserId,
    CarId,
    StartDate,
    EndDate,
    Status,
}
