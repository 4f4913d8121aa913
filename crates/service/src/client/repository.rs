use async_trait::async_trait;

use super::domain::Client;
use crate::errors::ServiceError;

/// Repository abstraction for clients and their bakery links.
///
/// `save` writes the client row and replaces its whole link collection as one
/// unit: either both are stored or neither is.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Client>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Client>, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn save(&self, client: Client) -> Result<Client, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct MockClientRepository {
        clients: Mutex<BTreeMap<i32, Client>>,
        saves: AtomicUsize,
    }

    impl MockClientRepository {
        pub fn len(&self) -> usize { self.clients.lock().unwrap().len() }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        pub fn saves(&self) -> usize { self.saves.load(Ordering::SeqCst) }
    }

    #[async_trait]
    impl ClientRepository for MockClientRepository {
        async fn find_all(&self) -> Result<Vec<Client>, ServiceError> {
            Ok(self.clients.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Client>, ServiceError> {
            Ok(self.clients.lock().unwrap().get(&id).cloned())
        }

        async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.clients.lock().unwrap().contains_key(&id))
        }

        async fn save(&self, mut client: Client) -> Result<Client, ServiceError> {
            self.saves.fetch_add(1, Ordering::SeqCst);
            let mut clients = self.clients.lock().unwrap();
            let id = match client.id {
                Some(id) if clients.contains_key(&id) => id,
                Some(id) => return Err(ServiceError::not_found("client", id)),
                None => clients.keys().next_back().copied().unwrap_or(0) + 1,
            };
            client.id = Some(id);
            clients.insert(id, client.clone());
            Ok(client)
        }

        async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
            self.clients.lock().unwrap().remove(&id);
            Ok(())
        }
    }
}
