use std::sync::Arc;
use tracing::{info, instrument};

use super::domain::{Bakery, NewBakery};
use super::repository::BakeryRepository;
use crate::errors::ServiceError;

/// Bakery business service independent of web framework
pub struct BakeryService<B: BakeryRepository> {
    repo: Arc<B>,
}

impl<B: BakeryRepository> BakeryService<B> {
    pub fn new(repo: Arc<B>) -> Self { Self { repo } }

    pub async fn list(&self) -> Result<Vec<Bakery>, ServiceError> { self.repo.find_all().await }

    pub async fn get(&self, id: i32) -> Result<Bakery, ServiceError> {
        self.repo.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("bakery", id))
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewBakery) -> Result<Bakery, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(bakery_id = created.id, "bakery_created");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bakery::repository::mock::MockBakeryRepository;

    #[tokio::test]
    async fn get_missing_bakery_is_not_found() {
        let svc = BakeryService::new(Arc::new(MockBakeryRepository::with_ids(&[1])));
        assert_eq!(svc.get(1).await.unwrap().id, 1);
        assert!(matches!(svc.get(2).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn create_then_list() {
        let svc = BakeryService::new(Arc::new(MockBakeryRepository::default()));
        assert!(svc.list().await.unwrap().is_empty());
        let b = svc.create(NewBakery { name: "Sur".into(), address: "Calle 9".into() }).await.unwrap();
        assert_eq!(svc.list().await.unwrap(), vec![b]);
    }
}
