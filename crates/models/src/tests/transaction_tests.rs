use crate::bakery;
use sea_orm::{EntityTrait, PaginatorTrait, TransactionTrait};
use anyhow::Result;

use super::setup_test_db;

/// Test basic transaction commit
#[tokio::test]
async fn test_transaction_commit() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = bakery::create(&txn, "Committed", "x").await?;
    txn.commit().await?;

    let found = bakery::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    Ok(())
}

/// Test transaction rollback
#[tokio::test]
async fn test_transaction_rollback() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    bakery::create(&txn, "Rolled back", "x").await?;
    txn.rollback().await?;

    assert_eq!(bakery::Entity::find().count(&db).await?, 0);
    Ok(())
}

/// Dropping a transaction without commit discards its writes.
#[tokio::test]
async fn test_transaction_dropped_without_commit() -> Result<()> {
    let db = setup_test_db().await?;

    {
        let txn = db.begin().await?;
        bakery::create(&txn, "Dropped", "x").await?;
    }

    assert_eq!(bakery::Entity::find().count(&db).await?, 0);
    Ok(())
}
