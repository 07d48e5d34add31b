use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(
                        uuid(Products::ProductId)
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(text(Products::Name))
                    .col(text_null(Products::Desc))
                    .col(double(Products::Price))
                    .col(integer(Products::Discount).default(0))
                    .col(integer(Products::Stock).default(1))
                    // Passed through as given, no foreign key
                    .col(integer_null(Products::CategoryId))
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Products::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_category_id")
                    .table(Products::Table)
                    .col(Products::CategoryId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).if_exists().to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    ProductId,
    Name,
    Desc,
    Price,
    Discount,
    Stock,
    CategoryId,
    CreatedAt,
    UpdatedAt,
}
