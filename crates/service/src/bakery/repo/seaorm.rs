use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::bakery::domain::{Bakery, NewBakery};
use crate::bakery::repository::BakeryRepository;
use crate::errors::ServiceError;

pub struct SeaOrmBakeryRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl BakeryRepository for SeaOrmBakeryRepository {
    async fn find_all(&self) -> Result<Vec<Bakery>, ServiceError> {
        let rows = models::bakery::Entity::find()
            .order_by_asc(models::bakery::Column::Id)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(Bakery::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Bakery>, ServiceError> {
        let res = models::bakery::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(res.map(Bakery::from))
    }

    async fn create(&self, input: NewBakery) -> Result<Bakery, ServiceError> {
        let created = models::bakery::create(&self.db, &input.name, &input.address).await?;
        Ok(created.into())
    }
}
