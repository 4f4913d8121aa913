use async_trait::async_trait;

use super::domain::{NewProduct, Product};
use crate::errors::ServiceError;

/// Repository abstraction for products and their bakery sets.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    /// Insert the product row and its bakery set as one unit.
    async fn save(&self, input: NewProduct) -> Result<Product, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
    /// Add `delta` to the stored stock atomically. `None` when the product is absent.
    async fn add_stock(&self, id: i32, delta: i32) -> Result<Option<Product>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockProductRepository {
        products: Mutex<BTreeMap<i32, Product>>,
    }

    impl MockProductRepository {
        pub fn len(&self) -> usize { self.products.lock().unwrap().len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
            Ok(self.products.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Product>, ServiceError> {
            Ok(self.products.lock().unwrap().get(&id).cloned())
        }

        async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.products.lock().unwrap().contains_key(&id))
        }

        async fn save(&self, input: NewProduct) -> Result<Product, ServiceError> {
            let mut products = self.products.lock().unwrap();
            let id = products.keys().next_back().copied().unwrap_or(0) + 1;
            let p = Product { id, name: input.name, stock: input.stock, bakery_ids: input.bakery_ids };
            products.insert(id, p.clone());
            Ok(p)
        }

        async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
            self.products.lock().unwrap().remove(&id);
            Ok(())
        }

        async fn add_stock(&self, id: i32, delta: i32) -> Result<Option<Product>, ServiceError> {
            let mut products = self.products.lock().unwrap();
            let Some(p) = products.get_mut(&id) else { return Ok(None) };
            p.stock = p
                .stock
                .checked_add(delta)
                .ok_or_else(|| ServiceError::Validation(format!("stock overflow for product {}", id)))?;
            Ok(Some(p.clone()))
        }
    }
}
