//! Port to the external user directory.
//!
//! The client service only sees [`DirectoryPort`]; production wires in
//! [`common::directory::DirectoryHttpClient`], tests use [`mock::MockDirectory`].

use async_trait::async_trait;
use common::directory::DirectoryHttpClient;
use common::types::DirectoryUser;
use common::CoreError;

pub mod mock;

#[async_trait]
pub trait DirectoryPort: Send + Sync {
    async fn list_users(&self) -> Result<Vec<DirectoryUser>, CoreError>;
    async fn get_user(&self, id: i32) -> Result<Option<DirectoryUser>, CoreError>;
    async fn update_user(&self, id: i32, user: &DirectoryUser) -> Result<(), CoreError>;
    async fn delete_user(&self, id: i32) -> Result<(), CoreError>;
}

#[async_trait]
impl DirectoryPort for DirectoryHttpClient {
    async fn list_users(&self) -> Result<Vec<DirectoryUser>, CoreError> { DirectoryHttpClient::list_users(self).await }

    async fn get_user(&self, id: i32) -> Result<Option<DirectoryUser>, CoreError> { DirectoryHttpClient::get_user(self, id).await }

    async fn update_user(&self, id: i32, user: &DirectoryUser) -> Result<(), CoreError> {
        DirectoryHttpClient::update_user(self, id, user).await
    }

    async fn delete_user(&self, id: i32) -> Result<(), CoreError> { DirectoryHttpClient::delete_user(self, id).await }
}

/// Outcome of the directory push that follows a committed local write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorySync {
    Synced,
    Failed(String),
}

impl DirectorySync {
    pub fn from_result(res: Result<(), CoreError>) -> Self {
        match res {
            Ok(()) => DirectorySync::Synced,
            Err(e) => DirectorySync::Failed(e.to_string()),
        }
    }

    pub fn is_synced(&self) -> bool { matches!(self, DirectorySync::Synced) }

    pub fn as_str(&self) -> &'static str {
        match self {
            DirectorySync::Synced => "synced",
            DirectorySync::Failed(_) => "failed",
        }
    }
}

/// Local result plus what happened when the change was pushed to the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncOutcome<T> {
    pub local: T,
    pub directory: DirectorySync,
}
