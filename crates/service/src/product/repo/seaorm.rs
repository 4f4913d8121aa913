use std::collections::{BTreeSet, HashMap};

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use models::{product, product_bakery};

use crate::errors::ServiceError;
use crate::product::domain::{NewProduct, Product};
use crate::product::repository::ProductRepository;

pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: product::Model, bakery_ids: BTreeSet<i32>) -> Product {
    Product { id: m.id, name: m.name, stock: m.stock, bakery_ids }
}

impl SeaOrmProductRepository {
    async fn bakery_ids_of<C: sea_orm::ConnectionTrait>(db: &C, id: i32) -> Result<BTreeSet<i32>, ServiceError> {
        let links = product_bakery::Entity::find()
            .filter(product_bakery::Column::ProductId.eq(id))
            .all(db)
            .await
            .map_err(ServiceError::db)?;
        Ok(links.into_iter().map(|l| l.bakery_id).collect())
    }
}

#[async_trait::async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        let mut sets: HashMap<i32, BTreeSet<i32>> = HashMap::new();
        for l in product_bakery::Entity::find().all(&self.db).await.map_err(ServiceError::db)? {
            sets.entry(l.product_id).or_default().insert(l.bakery_id);
        }
        Ok(rows
            .into_iter()
            .map(|p| {
                let ids = sets.remove(&p.id).unwrap_or_default();
                to_domain(p, ids)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError> {
        let Some(found) = product::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)? else {
            return Ok(None);
        };
        let ids = Self::bakery_ids_of(&self.db, id).await?;
        Ok(Some(to_domain(found, ids)))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let n = product::Entity::find_by_id(id).count(&self.db).await.map_err(ServiceError::db)?;
        Ok(n > 0)
    }

    async fn save(&self, input: NewProduct) -> Result<Product, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        let row = product::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            stock: Set(input.stock),
            created_at: Set(Utc::now().into()),
        }
        .insert(&txn)
        .await
        .map_err(ServiceError::db)?;

        if !input.bakery_ids.is_empty() {
            let links = input
                .bakery_ids
                .iter()
                .map(|&bakery_id| product_bakery::ActiveModel { product_id: Set(row.id), bakery_id: Set(bakery_id) });
            product_bakery::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await
                .map_err(ServiceError::db)?;
        }

        txn.commit().await.map_err(ServiceError::db)?;
        Ok(to_domain(row, input.bakery_ids))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        product_bakery::Entity::delete_many()
            .filter(product_bakery::Column::ProductId.eq(id))
            .exec(&txn)
            .await
            .map_err(ServiceError::db)?;
        product::Entity::delete_by_id(id).exec(&txn).await.map_err(ServiceError::db)?;
        txn.commit().await.map_err(ServiceError::db)?;
        Ok(())
    }

    async fn add_stock(&self, id: i32, delta: i32) -> Result<Option<Product>, ServiceError> {
        // The bound lives in the statement, so a concurrent delta can never
        // push the column past i32 between a check and the write.
        let within_bounds = if delta >= 0 {
            product::Column::Stock.lte(i32::MAX - delta)
        } else {
            product::Column::Stock.gte(i32::MIN - delta)
        };

        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        let res = product::Entity::update_many()
            .col_expr(product::Column::Stock, Expr::col(product::Column::Stock).add(delta))
            .filter(product::Column::Id.eq(id))
            .filter(within_bounds)
            .exec(&txn)
            .await
            .map_err(ServiceError::db)?;

        let Some(updated) = product::Entity::find_by_id(id).one(&txn).await.map_err(ServiceError::db)? else {
            return Ok(None);
        };
        if res.rows_affected == 0 {
            return Err(ServiceError::Validation(format!("stock overflow for product {}", id)));
        }
        let ids = Self::bakery_ids_of(&txn, id).await?;
        txn.commit().await.map_err(ServiceError::db)?;
        Ok(Some(to_domain(updated, ids)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, seed_bakery};

    fn new_product(name: &str, stock: i32, ids: &[i32]) -> NewProduct {
        NewProduct { name: name.into(), stock, bakery_ids: ids.iter().copied().collect() }
    }

    #[tokio::test]
    async fn save_and_find_with_bakery_set() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let b1 = seed_bakery(&db, "North").await?;
        let b2 = seed_bakery(&db, "South").await?;
        let repo = SeaOrmProductRepository { db };

        let saved = repo.save(new_product("Croissant", 5, &[b2, b1])).await?;
        let found = repo.find_by_id(saved.id).await?.expect("stored");
        assert_eq!(found, saved);
        assert_eq!(found.bakery_ids.into_iter().collect::<Vec<_>>(), vec![b1, b2]);

        let plain = repo.save(new_product("Roll", 0, &[])).await?;
        let all = repo.find_all().await?;
        assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![saved.id, plain.id]);
        assert!(all[1].bakery_ids.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn add_stock_accumulates_and_allows_negative() -> Result<(), anyhow::Error> {
        let repo = SeaOrmProductRepository { db: get_db().await? };
        let p = repo.save(new_product("Brioche", 10, &[])).await?;

        assert_eq!(repo.add_stock(p.id, -3).await?.map(|p| p.stock), Some(7));
        assert_eq!(repo.add_stock(p.id, -10).await?.map(|p| p.stock), Some(-3));
        assert_eq!(repo.add_stock(p.id + 1, 1).await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn add_stock_overflow_leaves_stock_unchanged() -> Result<(), anyhow::Error> {
        let repo = SeaOrmProductRepository { db: get_db().await? };
        let p = repo.save(new_product("Big", i32::MAX - 1, &[])).await?;

        let err = repo.add_stock(p.id, 5).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(repo.find_by_id(p.id).await?.map(|p| p.stock), Some(i32::MAX - 1));

        // exactly reaching the bound is fine
        assert_eq!(repo.add_stock(p.id, 1).await?.map(|p| p.stock), Some(i32::MAX));
        Ok(())
    }

    #[tokio::test]
    async fn add_stock_underflow_is_validation_error() -> Result<(), anyhow::Error> {
        let repo = SeaOrmProductRepository { db: get_db().await? };
        let p = repo.save(new_product("Deep", i32::MIN + 2, &[])).await?;

        assert!(matches!(repo.add_stock(p.id, -3).await, Err(ServiceError::Validation(_))));
        assert_eq!(repo.add_stock(p.id, -2).await?.map(|p| p.stock), Some(i32::MIN));
        Ok(())
    }

    #[tokio::test]
    async fn delete_removes_product_and_links() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let b = seed_bakery(&db, "East").await?;
        let repo = SeaOrmProductRepository { db: db.clone() };
        let p = repo.save(new_product("Tart", 1, &[b])).await?;

        assert!(repo.exists_by_id(p.id).await?);
        repo.delete_by_id(p.id).await?;
        assert!(!repo.exists_by_id(p.id).await?);
        assert!(product_bakery::Entity::find().all(&db).await?.is_empty());
        Ok(())
    }
}
