use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use models::{client, client_bakery};

use crate::client::domain::{Client, ClientBakeryLink};
use crate::client::repository::ClientRepository;
use crate::errors::ServiceError;

pub struct SeaOrmClientRepository {
    pub db: DatabaseConnection,
}

fn to_domain(m: client::Model, links: Vec<client_bakery::Model>) -> Client {
    Client {
        id: Some(m.id),
        name: m.name,
        email: m.email,
        phone: m.phone,
        updated_at: m.updated_at.with_timezone(&Utc),
        links: links.into_iter().map(|l| ClientBakeryLink { bakery_id: l.bakery_id }).collect(),
    }
}

#[async_trait::async_trait]
impl ClientRepository for SeaOrmClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, ServiceError> {
        let rows = client::Entity::find()
            .order_by_asc(client::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        let mut links: HashMap<i32, Vec<client_bakery::Model>> = HashMap::new();
        for l in client_bakery::Entity::find()
            .order_by_asc(client_bakery::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?
        {
            links.entry(l.client_id).or_default().push(l);
        }
        Ok(rows
            .into_iter()
            .map(|c| {
                let ls = links.remove(&c.id).unwrap_or_default();
                to_domain(c, ls)
            })
            .collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Client>, ServiceError> {
        let Some(found) = client::Entity::find_by_id(id).one(&self.db).await.map_err(ServiceError::db)? else {
            return Ok(None);
        };
        let links = client_bakery::Entity::find()
            .filter(client_bakery::Column::ClientId.eq(id))
            .order_by_asc(client_bakery::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(Some(to_domain(found, links)))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let n = client::Entity::find_by_id(id).count(&self.db).await.map_err(ServiceError::db)?;
        Ok(n > 0)
    }

    async fn save(&self, client: Client) -> Result<Client, ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;

        let am = client::ActiveModel {
            id: client.id.map(Set).unwrap_or(NotSet),
            name: Set(client.name.clone()),
            email: Set(client.email.clone()),
            phone: Set(client.phone.clone()),
            updated_at: Set(client.updated_at.into()),
        };
        let row = match client.id {
            Some(_) => am.update(&txn).await,
            None => am.insert(&txn).await,
        }
        .map_err(ServiceError::db)?;

        client_bakery::Entity::delete_many()
            .filter(client_bakery::Column::ClientId.eq(row.id))
            .exec(&txn)
            .await
            .map_err(ServiceError::db)?;
        let mut stored = Vec::with_capacity(client.links.len());
        for link in &client.links {
            let l = client_bakery::ActiveModel { id: NotSet, client_id: Set(row.id), bakery_id: Set(link.bakery_id) }
                .insert(&txn)
                .await
                .map_err(ServiceError::db)?;
            stored.push(l);
        }

        txn.commit().await.map_err(ServiceError::db)?;
        Ok(to_domain(row, stored))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        let txn = self.db.begin().await.map_err(ServiceError::db)?;
        client_bakery::Entity::delete_many()
            .filter(client_bakery::Column::ClientId.eq(id))
            .exec(&txn)
            .await
            .map_err(ServiceError::db)?;
        client::Entity::delete_by_id(id).exec(&txn).await.map_err(ServiceError::db)?;
        txn.commit().await.map_err(ServiceError::db)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::domain::ClientDto;
    use crate::test_support::{get_db, seed_bakery};

    fn dto(name: &str) -> ClientDto {
        ClientDto { id: None, name: name.into(), email: format!("{name}@example.com"), phone: "555".into(), bakery_id: None }
    }

    #[tokio::test]
    async fn save_inserts_client_with_links() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let bakery = seed_bakery(&db, "Main").await?;
        let repo = SeaOrmClientRepository { db };

        let saved = repo.save(Client::new_from(&dto("ana"), vec![ClientBakeryLink { bakery_id: bakery }])).await?;
        let id = saved.id.expect("assigned id");

        let found = repo.find_by_id(id).await?.expect("stored");
        assert_eq!(found.name, "ana");
        assert_eq!(found.links, vec![ClientBakeryLink { bakery_id: bakery }]);
        assert!(repo.exists_by_id(id).await?);
        assert!(!repo.exists_by_id(id + 100).await?);
        Ok(())
    }

    #[tokio::test]
    async fn save_existing_replaces_link_collection() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let b1 = seed_bakery(&db, "One").await?;
        let b2 = seed_bakery(&db, "Two").await?;
        let repo = SeaOrmClientRepository { db };

        let mut c = repo.save(Client::new_from(&dto("bo"), vec![ClientBakeryLink { bakery_id: b1 }])).await?;
        c.apply_update(&dto("bo2"), vec![ClientBakeryLink { bakery_id: b2 }]);
        repo.save(c.clone()).await?;

        let found = repo.find_by_id(c.id.unwrap()).await?.unwrap();
        assert_eq!(found.name, "bo2");
        assert_eq!(found.links, vec![ClientBakeryLink { bakery_id: b2 }]);

        c.apply_update(&dto("bo3"), Vec::new());
        repo.save(c.clone()).await?;
        assert!(repo.find_by_id(c.id.unwrap()).await?.unwrap().links.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn failed_link_insert_rolls_back_client_row() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmClientRepository { db };

        // Bakery 404 does not exist: the FK rejects the link and the client insert is undone.
        let res = repo.save(Client::new_from(&dto("ghost"), vec![ClientBakeryLink { bakery_id: 404 }])).await;
        assert!(matches!(res, Err(ServiceError::Db(_))));
        assert!(repo.find_all().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn find_all_in_id_order_and_delete_removes_links() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let b = seed_bakery(&db, "Shared").await?;
        let repo = SeaOrmClientRepository { db: db.clone() };

        let first = repo.save(Client::new_from(&dto("a"), vec![ClientBakeryLink { bakery_id: b }])).await?;
        let second = repo.save(Client::new_from(&dto("b"), Vec::new())).await?;

        let all = repo.find_all().await?;
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![first.id, second.id]);
        assert_eq!(all[0].links.len(), 1);

        repo.delete_by_id(first.id.unwrap()).await?;
        assert!(repo.find_by_id(first.id.unwrap()).await?.is_none());
        let links = client_bakery::Entity::find().all(&db).await?;
        assert!(links.is_empty());
        Ok(())
    }
}
