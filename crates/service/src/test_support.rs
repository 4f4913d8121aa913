#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, sqlite_memory_config};

/// Fresh in-memory database for the current test, migrated to the latest schema.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&sqlite_memory_config()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// Insert a bakery directly through the model layer and return its id.
pub async fn seed_bakery(db: &DatabaseConnection, name: &str) -> Result<i32, anyhow::Error> {
    Ok(models::bakery::create(db, name, "").await?.id)
}
