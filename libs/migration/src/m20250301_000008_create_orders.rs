use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // cashier_id / payment_id are checked on create but not constrained:
        // an order is a receipt and outlives the rows it was taken against.
        manager
            .create_table(
                Table::create()
                    .table(Orders::Table)
                    .if_not_exists()
                    .col(pk_auto(Orders::OrderId))
                    .col(integer(Orders::CashierId))
                    .col(integer(Orders::PaymentId))
                    .col(double(Orders::TotalPrice))
                    .col(double(Orders::TotalPaid))
                    .col(double(Orders::TotalReturn))
                    .col(text(Orders::ReceiptId))
                    .col(boolean(Orders::IsDownload).default(false))
                    .col(json_binary(Orders::Products).default("[]"))
                    .col(
                        timestamp_with_time_zone(Orders::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Orders::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_receipt_id")
                    .table(Orders::Table)
                    .col(Orders::ReceiptId)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_orders_cashier_id")
                    .table(Orders::Table)
                    .col(Orders::CashierId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Orders::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Orders {
    Table,
    OrderId,
    CashierId,
    PaymentId,
    TotalPrice,
    TotalPaid,
    TotalReturn,
    ReceiptId,
    IsDownload,
    Products,
    CreatedAt,
    UpdatedAt,
}
