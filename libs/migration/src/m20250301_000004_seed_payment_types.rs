use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            INSERT INTO payment_types (payment_type_id, name, created_at, updated_at)
            VALUES
                (1, 'CASH', NOW(), NOW()),
                (2, 'TRANSFER', NOW(), NOW()),
                (3, 'ETC', NOW(), NOW())
            ON CONFLICT (payment_type_id) DO NOTHING
            "#,
        )
        .await?;

        // Explicit ids above do not advance the sequence
        db.execute_unprepared(
            r#"
            SELECT setval(
                pg_get_serial_sequence('payment_types', 'payment_type_id'),
                (SELECT MAX(payment_type_id) FROM payment_types)
            )
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DELETE FROM payment_types WHERE payment_type_id IN (1, 2, 3)")
            .await?;

        Ok(())
    }
}
