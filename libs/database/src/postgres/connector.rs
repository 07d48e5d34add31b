use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use super::PostgresConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryConfig, retry_with_backoff};

pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}

pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    connect_with_options(config.into_connect_options()).await
}

/// Opens the pool, retrying with exponential backoff while the server is
/// unreachable (e.g. the database container is still starting).
///
/// ```ignore
/// use core_config::FromEnv;
/// use database::{RetryConfig, postgres::{PostgresConfig, connect_from_config_with_retry}};
///
/// let config = PostgresConfig::from_env()?;
/// let db = connect_from_config_with_retry(config, RetryConfig::default()).await?;
/// ```
pub async fn connect_from_config_with_retry(
    config: PostgresConfig,
    retry: RetryConfig,
) -> Result<DatabaseConnection, DbErr> {
    let options = config.into_connect_options();

    retry_with_backoff(|| connect_with_options(options.clone()), retry).await
}

/// Applies every pending migration of `M`.
///
/// ```ignore
/// use migration::Migrator;
///
/// run_migrations::<Migrator>(&db, "pos_api").await?;
/// ```
pub async fn run_migrations<M: MigratorTrait>(
    db: &DatabaseConnection,
    app_name: &str,
) -> DatabaseResult<()> {
    info!("Running {} database migrations...", app_name);
    M::up(db, None)
        .await
        .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
    info!("Migrations completed successfully for {}", app_name);
    Ok(())
}

/// Closes every pooled connection. Consumes the handle so the pool cannot be
/// closed twice.
pub async fn close(db: DatabaseConnection) -> Result<(), DbErr> {
    db.close().await?;
    info!("PostgreSQL connection pool closed");
    Ok(())
}
