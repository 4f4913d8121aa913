use crate::db::{connect_with_config, sqlite_memory_config};
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with all migrations applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&sqlite_memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}



/// Transaction handling tests
pub mod transaction_tests;
