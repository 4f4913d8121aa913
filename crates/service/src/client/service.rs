use std::sync::Arc;

use common::types::DirectoryUser;
use tracing::{debug, info, instrument, warn};

use super::domain::{Client, ClientBakeryLink, ClientDto};
use super::repository::ClientRepository;
use crate::bakery::repository::BakeryRepository;
use crate::directory::{DirectoryPort, DirectorySync, SyncOutcome};
use crate::errors::ServiceError;

/// Unified view of clients across the local store and the external directory.
///
/// Local writes are atomic per operation. Directory pushes happen after the
/// local commit and their outcome is reported separately in [`SyncOutcome`].
pub struct ClientService<C, B, D>
where
    C: ClientRepository,
    B: BakeryRepository,
    D: DirectoryPort + ?Sized,
{
    clients: Arc<C>,
    bakeries: Arc<B>,
    directory: Arc<D>,
}

impl<C, B, D> ClientService<C, B, D>
where
    C: ClientRepository,
    B: BakeryRepository,
    D: DirectoryPort + ?Sized,
{
    pub fn new(clients: Arc<C>, bakeries: Arc<B>, directory: Arc<D>) -> Self { Self { clients, bakeries, directory } }

    /// Local clients (storage order) followed by directory clients (directory order).
    ///
    /// The directory is best effort here: no data or a failed call adds nothing.
    pub async fn list_all(&self) -> Result<Vec<ClientDto>, ServiceError> {
        let mut out: Vec<ClientDto> = self.clients.find_all().await?.iter().map(Client::to_dto).collect();
        let local = out.len();
        match self.directory.list_users().await {
            Ok(users) => out.extend(users.into_iter().map(ClientDto::from)),
            Err(e) => warn!(error = %e, "directory_list_unavailable"),
        }
        debug!(local, remote = out.len() - local, "clients_listed");
        Ok(out)
    }

    /// Local first; the directory is only consulted on a local miss and its
    /// record is returned without being stored.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i32) -> Result<ClientDto, ServiceError> {
        if let Some(found) = self.clients.find_by_id(id).await? {
            return Ok(found.to_dto());
        }
        match self.directory.get_user(id).await {
            Ok(Some(user)) => Ok(user.into()),
            Ok(None) => Err(ServiceError::NotFound(format!("client not found locally or in directory: {}", id))),
            Err(e) => {
                warn!(error = %e, "directory_lookup_unavailable");
                Err(ServiceError::NotFound(format!("client not found locally or in directory: {}", id)))
            }
        }
    }

    /// Copy a directory record into the local store. The store assigns the local id.
    #[instrument(skip(self))]
    pub async fn import_from_directory(&self, id: i32) -> Result<ClientDto, ServiceError> {
        let user = self
            .directory
            .get_user(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("client not found in directory: {}", id)))?;
        let created = self.persist_new(&ClientDto::from(user)).await?;
        info!(directory_id = id, client_id = ?created.id, "client_imported");
        Ok(created)
    }

    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn create(&self, input: ClientDto) -> Result<ClientDto, ServiceError> {
        let created = self.persist_new(&input).await?;
        info!(client_id = ?created.id, "client_created");
        Ok(created)
    }

    /// Overwrite contact fields and replace the bakery links, then push the
    /// same data to the directory.
    ///
    /// The new link set is resolved before anything is written, so an unknown
    /// bakery leaves the stored client and its old links untouched.
    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: ClientDto) -> Result<SyncOutcome<ClientDto>, ServiceError> {
        let mut existing = self.clients.find_by_id(id).await?.ok_or_else(|| ServiceError::not_found("client", id))?;
        let links = self.resolve_links(input.bakery_id).await?;
        existing.apply_update(&input, links);
        let saved = self.clients.save(existing).await?.to_dto();
        info!(client_id = id, bakery_id = ?saved.bakery_id, "client_updated");

        let pushed = DirectoryUser::from(&ClientDto { id: Some(id), ..input });
        let directory = DirectorySync::from_result(self.directory.update_user(id, &pushed).await);
        if let DirectorySync::Failed(reason) = &directory {
            warn!(client_id = id, %reason, "directory_update_failed");
        }
        Ok(SyncOutcome { local: saved, directory })
    }

    /// Delete locally, then in the directory. A directory failure after the
    /// local delete is reported, not compensated.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<SyncOutcome<()>, ServiceError> {
        if !self.clients.exists_by_id(id).await? {
            return Err(ServiceError::not_found("client", id));
        }
        self.clients.delete_by_id(id).await?;
        info!(client_id = id, "client_deleted");

        let directory = DirectorySync::from_result(self.directory.delete_user(id).await);
        if let DirectorySync::Failed(reason) = &directory {
            warn!(client_id = id, %reason, "directory_delete_failed");
        }
        Ok(SyncOutcome { local: (), directory })
    }

    async fn persist_new(&self, input: &ClientDto) -> Result<ClientDto, ServiceError> {
        let links = self.resolve_links(input.bakery_id).await?;
        let saved = self.clients.save(Client::new_from(input, links)).await?;
        Ok(saved.to_dto())
    }

    /// At most one link; an unknown bakery is a hard error.
    async fn resolve_links(&self, bakery_id: Option<i32>) -> Result<Vec<ClientBakeryLink>, ServiceError> {
        let Some(bakery_id) = bakery_id else { return Ok(Vec::new()) };
        let bakery = self.bakeries.find_by_id(bakery_id).await?.ok_or(ServiceError::AssociationNotFound(bakery_id))?;
        Ok(vec![ClientBakeryLink { bakery_id: bakery.id }])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bakery::repository::mock::MockBakeryRepository;
    use crate::client::repository::mock::MockClientRepository;
    use crate::directory::mock::MockDirectory;

    type Svc = ClientService<MockClientRepository, MockBakeryRepository, MockDirectory>;

    struct Fixture {
        svc: Svc,
        clients: Arc<MockClientRepository>,
        directory: Arc<MockDirectory>,
    }

    fn fixture(bakeries: &[i32], remote: Vec<DirectoryUser>) -> Fixture {
        let clients = Arc::new(MockClientRepository::default());
        let directory = Arc::new(MockDirectory::with_users(remote));
        let svc = ClientService::new(clients.clone(), Arc::new(MockBakeryRepository::with_ids(bakeries)), directory.clone());
        Fixture { svc, clients, directory }
    }

    fn input(name: &str, bakery_id: Option<i32>) -> ClientDto {
        ClientDto { id: None, name: name.into(), email: format!("{name}@example.com"), phone: "600".into(), bakery_id }
    }

    fn remote(id: i32, name: &str, bakery_id: Option<i32>) -> DirectoryUser {
        DirectoryUser { id: Some(id), name: name.into(), email: format!("{name}@remote.io"), phone: "1".into(), bakery_id }
    }

    #[tokio::test]
    async fn list_puts_local_records_before_directory_records() {
        let f = fixture(&[1], vec![remote(10, "r1", None), remote(11, "r2", None)]);
        f.svc.create(input("l1", Some(1))).await.unwrap();
        f.svc.create(input("l2", None)).await.unwrap();

        let names: Vec<String> = f.svc.list_all().await.unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["l1", "l2", "r1", "r2"]);
        assert_eq!(f.clients.len(), 2, "directory records are never persisted");
    }

    #[tokio::test]
    async fn list_with_unavailable_directory_returns_local_only() {
        let f = fixture(&[], vec![remote(10, "r1", None)]);
        f.svc.create(input("l1", None)).await.unwrap();
        f.directory.set_unavailable(true);

        let all = f.svc.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "l1");
    }

    #[tokio::test]
    async fn get_local_client_never_calls_directory() {
        let f = fixture(&[], vec![]);
        let created = f.svc.create(input("ana", None)).await.unwrap();

        let got = f.svc.get_by_id(created.id.unwrap()).await.unwrap();
        assert_eq!(got, created);
        assert_eq!(f.directory.total_calls(), 0);
    }

    #[tokio::test]
    async fn get_remote_only_client_returns_it_without_local_write() {
        let f = fixture(&[], vec![remote(7, "remote", None)]);

        let got = f.svc.get_by_id(7).await.unwrap();
        assert_eq!(got.name, "remote");
        assert_eq!(got.id, Some(7));
        assert_eq!(f.directory.get_calls(), 1);
        assert_eq!(f.clients.saves(), 0);
        assert!(f.clients.is_empty());
    }

    #[tokio::test]
    async fn get_missing_everywhere_is_not_found() {
        let f = fixture(&[], vec![]);
        let err = f.svc.get_by_id(3).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(ref m) if m.contains('3')));
    }

    #[tokio::test]
    async fn import_with_unknown_bakery_leaves_store_untouched() {
        let f = fixture(&[1], vec![remote(5, "imp", Some(99))]);

        let err = f.svc.import_from_directory(5).await.unwrap_err();
        assert!(matches!(err, ServiceError::AssociationNotFound(99)));
        assert!(f.clients.is_empty());
        assert_eq!(f.clients.saves(), 0);
    }

    #[tokio::test]
    async fn import_persists_client_with_single_link() {
        let f = fixture(&[1], vec![remote(5, "imp", Some(1))]);

        let imported = f.svc.import_from_directory(5).await.unwrap();
        assert_eq!(imported.bakery_id, Some(1));
        assert_eq!(imported.name, "imp");
        assert_eq!(f.clients.len(), 1);
    }

    #[tokio::test]
    async fn import_missing_or_unreachable() {
        let f = fixture(&[], vec![]);
        assert!(matches!(f.svc.import_from_directory(1).await, Err(ServiceError::NotFound(_))));

        f.directory.set_unavailable(true);
        assert!(matches!(f.svc.import_from_directory(1).await, Err(ServiceError::UpstreamUnavailable(_))));
        assert!(f.clients.is_empty());
    }

    #[tokio::test]
    async fn create_with_unknown_bakery_fails() {
        let f = fixture(&[1], vec![]);
        let err = f.svc.create(input("x", Some(2))).await.unwrap_err();
        assert!(matches!(err, ServiceError::AssociationNotFound(2)));
        assert!(f.clients.is_empty());
    }

    #[tokio::test]
    async fn update_without_bakery_clears_links_and_pushes() {
        let f = fixture(&[1], vec![]);
        let created = f.svc.create(input("ana", Some(1))).await.unwrap();
        let id = created.id.unwrap();

        let out = f.svc.update(id, input("ana2", None)).await.unwrap();
        assert_eq!(out.local.name, "ana2");
        assert_eq!(out.local.bakery_id, None);
        assert!(out.directory.is_synced());

        let stored = f.clients.find_by_id(id).await.unwrap().unwrap();
        assert!(stored.links.is_empty());

        let pushed = f.directory.updates();
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].0, id);
        assert_eq!(pushed[0].1.name, "ana2");
        assert_eq!(pushed[0].1.id, Some(id));
    }

    #[tokio::test]
    async fn update_with_unknown_bakery_keeps_previous_links() {
        let f = fixture(&[1], vec![]);
        let id = f.svc.create(input("ana", Some(1))).await.unwrap().id.unwrap();

        let err = f.svc.update(id, input("changed", Some(42))).await.unwrap_err();
        assert!(matches!(err, ServiceError::AssociationNotFound(42)));

        let stored = f.clients.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "ana");
        assert_eq!(stored.links, vec![ClientBakeryLink { bakery_id: 1 }]);
        assert_eq!(f.directory.update_calls(), 0);
    }

    #[tokio::test]
    async fn update_reports_failed_directory_push_after_local_commit() {
        let f = fixture(&[], vec![]);
        let id = f.svc.create(input("ana", None)).await.unwrap().id.unwrap();
        f.directory.set_unavailable(true);

        let out = f.svc.update(id, input("bea", None)).await.unwrap();
        assert!(matches!(out.directory, DirectorySync::Failed(_)));
        assert_eq!(f.clients.find_by_id(id).await.unwrap().unwrap().name, "bea");
    }

    #[tokio::test]
    async fn update_missing_client_is_not_found() {
        let f = fixture(&[], vec![]);
        assert!(matches!(f.svc.update(8, input("x", None)).await, Err(ServiceError::NotFound(_))));
        assert_eq!(f.directory.total_calls(), 0);
    }

    #[tokio::test]
    async fn delete_missing_client_makes_no_directory_call() {
        let f = fixture(&[], vec![]);
        let err = f.svc.delete(12).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(f.directory.delete_calls(), 0);
    }

    #[tokio::test]
    async fn delete_removes_locally_then_in_directory() {
        let f = fixture(&[], vec![]);
        let id = f.svc.create(input("gone", None)).await.unwrap().id.unwrap();

        let out = f.svc.delete(id).await.unwrap();
        assert!(out.directory.is_synced());
        assert!(f.clients.is_empty());
        assert_eq!(f.directory.delete_calls(), 1);

        let id = f.svc.create(input("gone2", None)).await.unwrap().id.unwrap();
        f.directory.set_unavailable(true);
        let out = f.svc.delete(id).await.unwrap();
        assert!(!out.directory.is_synced());
        assert!(f.clients.is_empty(), "local delete is not compensated");
    }
}
