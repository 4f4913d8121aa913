use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::{NewProduct, ProductDto};
use super::repository::ProductRepository;
use crate::bakery::repository::BakeryRepository;
use crate::errors::ServiceError;

/// Product catalog service independent of web framework
pub struct ProductService<P: ProductRepository, B: BakeryRepository> {
    products: Arc<P>,
    bakeries: Arc<B>,
}

impl<P: ProductRepository, B: BakeryRepository> ProductService<P, B> {
    pub fn new(products: Arc<P>, bakeries: Arc<B>) -> Self { Self { products, bakeries } }

    /// All products in ascending id order. An empty catalog is reported as `NotFound`.
    pub async fn list_all(&self) -> Result<Vec<ProductDto>, ServiceError> {
        let all = self.products.find_all().await?;
        if all.is_empty() {
            return Err(ServiceError::NotFound("no products found".into()));
        }
        Ok(all.iter().map(|p| p.to_dto()).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ProductDto, ServiceError> {
        let found = self.products.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("product", id))?;
        Ok(found.to_dto())
    }

    /// Persist a new product. Bakery ids that do not resolve are dropped, not rejected.
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn save(&self, input: ProductDto) -> Result<ProductDto, ServiceError> {
        let name = input.name.trim().to_string();
        models::product::validate_name(&name)?;
        let mut resolved = BTreeSet::new();
        for bakery_id in &input.bakery_ids {
            match self.bakeries.find_by_id(*bakery_id).await? {
                Some(b) => {
                    resolved.insert(b.id);
                }
                None => debug!(bakery_id, "unknown_bakery_skipped"),
            }
        }
        let saved = self
            .products
            .save(NewProduct { name, stock: input.stock, bakery_ids: resolved })
            .await?;
        info!(product_id = saved.id, bakeries = saved.bakery_ids.len(), "product_created");
        Ok(saved.to_dto())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if !self.products.exists_by_id(id).await? {
            return Err(ServiceError::not_found("product", id));
        }
        self.products.delete_by_id(id).await?;
        info!(product_id = id, "product_deleted");
        Ok(())
    }

    /// Add a signed delta to the stock and return the updated product.
    ///
    /// Example:
    /// ```
    /// use std::sync::Arc;
    /// use service::bakery::repository::mock::MockBakeryRepository;
    /// use service::product::domain::ProductDto;
    /// use service::product::repository::mock::MockProductRepository;
    /// use service::product::ProductService;
    ///
    /// let svc = ProductService::new(Arc::new(MockProductRepository::default()), Arc::new(MockBakeryRepository::default()));
    /// tokio_test::block_on(async {
    ///     let p = svc.save(ProductDto { id: None, name: "Pan".into(), stock: 10, bakery_ids: Default::default() }).await.unwrap();
    ///     let id = p.id.unwrap();
    ///     svc.update_stock(id, -3).await.unwrap();
    ///     let after = svc.update_stock(id, -3).await.unwrap();
    ///     assert_eq!(after.stock, 4);
    /// });
    /// ```
    #[instrument(skip(self))]
    pub async fn update_stock(&self, id: i32, delta: i32) -> Result<ProductDto, ServiceError> {
        let updated = self.products.add_stock(id, delta).await?.ok_or_else(|| ServiceError::not_found("product", id))?;
        info!(product_id = id, delta, stock = updated.stock, "product_stock_updated");
        Ok(updated.to_dto())
    }
}
