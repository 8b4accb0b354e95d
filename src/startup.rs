use std::sync::Arc;

use crate::{
    config::Config,
    daemon::HttpDaemonClient,
    error::{config::ConfigError, AppError},
    storage::{ArchiveStore, S3ArchiveStore},
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to
/// ensure the database schema is up-to-date. This function must complete
/// successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP daemon client with the configured request timeout.
pub fn setup_daemon_client(config: &Config) -> Result<HttpDaemonClient, AppError> {
    Ok(HttpDaemonClient::new(config.daemon_timeout)?)
}

/// Builds the object-storage adapter for backup archives.
///
/// # Returns
/// - `Ok(Arc<dyn ArchiveStore>)` - Store bound to the configured bucket
/// - `Err(AppError)` - `S3_BUCKET` is not configured
pub async fn setup_archive_store(config: &Config) -> Result<Arc<dyn ArchiveStore>, AppError> {
    let bucket = config
        .s3_bucket
        .clone()
        .ok_or_else(|| ConfigError::MissingEnvVar("S3_BUCKET".to_string()))?;

    let store = S3ArchiveStore::new(bucket, config.s3_endpoint.as_deref()).await;

    Ok(Arc::new(store))
}
