use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(pk_auto(Payments::PaymentId))
                    .col(text(Payments::Name))
                    .col(text(Payments::Type))
                    .col(integer(Payments::PaymentTypeId))
                    .col(text_null(Payments::Logo))
                    .col(
                        timestamp_with_time_zone(Payments::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Payments::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payments_payment_type_id")
                            .from(Payments::Table, Payments::PaymentTypeId)
                            .to(PaymentTypes::Table, PaymentTypes::PaymentTypeId)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    PaymentId,
    Name,
    Type,
    PaymentTypeId,
    Logo,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PaymentTypes {
    Table,
    PaymentTypeId,
}
