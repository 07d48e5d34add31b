use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentTypes::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentTypes::PaymentTypeId))
                    .col(text(PaymentTypes::Name))
                    .col(
                        timestamp_with_time_zone(PaymentTypes::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(PaymentTypes::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookup by name on every payment write
        manager
            .create_index(
                Index::create()
                    .name("idx_payment_types_name")
                    .table(PaymentTypes::Table)
                    .col(PaymentTypes::Name)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentTypes::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PaymentTypes {
    Table,
    PaymentTypeId,
    Name,
    CreatedAt,
    UpdatedAt,
}
