use async_trait::async_trait;

use super::domain::{Bakery, NewBakery};
use crate::errors::ServiceError;

/// Repository abstraction for bakery lookups.
#[async_trait]
pub trait BakeryRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Bakery>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Bakery>, ServiceError>;
    async fn create(&self, input: NewBakery) -> Result<Bakery, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockBakeryRepository {
        bakeries: Mutex<BTreeMap<i32, Bakery>>,
        lookups: AtomicUsize,
    }

    impl MockBakeryRepository {
        /// Pre-seed bakeries with the given ids.
        pub fn with_ids(ids: &[i32]) -> Self {
            let map = ids
                .iter()
                .map(|&id| (id, Bakery { id, name: format!("bakery-{id}"), address: String::new() }))
                .collect();
            Self { bakeries: Mutex::new(map), lookups: AtomicUsize::new(0) }
        }

        pub fn lookups(&self) -> usize { self.lookups.load(Ordering::SeqCst) }
    }

    #[async_trait]
    impl BakeryRepository for MockBakeryRepository {
        async fn find_all(&self) -> Result<Vec<Bakery>, ServiceError> {
            Ok(self.bakeries.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Bakery>, ServiceError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self.bakeries.lock().unwrap().get(&id).cloned())
        }

        async fn create(&self, input: NewBakery) -> Result<Bakery, ServiceError> {
            let mut bakeries = self.bakeries.lock().unwrap();
            let id = bakeries.keys().next_back().copied().unwrap_or(0) + 1;
            let b = Bakery { id, name: input.name, address: input.address };
            bakeries.insert(id, b.clone());
            Ok(b)
        }
    }
}
