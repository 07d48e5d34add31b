use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cashiers::Table)
                    .if_not_exists()
                    .col(pk_auto(Cashiers::CashierId))
                    .col(text(Cashiers::Name))
                    .col(text(Cashiers::Passcode))
                    .col(
                        timestamp_with_time_zone(Cashiers::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Cashiers::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cashiers::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cashiers {
    Table,
    CashierId,
    Name,
    Passcode,
    CreatedAt,
    UpdatedAt,
}
