use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Discounts::Table)
                    .if_not_exists()
                    .col(pk_auto(Discounts::DiscountId))
                    .col(integer(Discounts::Qty))
                    .col(text(Discounts::Type))
                    .col(integer(Discounts::Result))
                    .col(timestamp_with_time_zone_null(Discounts::ExpiredAt))
                    .col(
                        timestamp_with_time_zone(Discounts::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Discounts::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Discounts::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Discounts {
    Table,
    DiscountId,
    Qty,
    Type,
    Result,
    ExpiredAt,
    CreatedAt,
    UpdatedAt,
}
