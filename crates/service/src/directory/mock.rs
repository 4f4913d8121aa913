//! In-memory directory double with per-operation call counters.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use common::types::DirectoryUser;
use common::CoreError;

use super::DirectoryPort;

#[derive(Default)]
pub struct MockDirectory {
    users: Mutex<Vec<DirectoryUser>>,
    updates: Mutex<Vec<(i32, DirectoryUser)>>,
    unavailable: AtomicBool,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MockDirectory {
    pub fn with_users(users: Vec<DirectoryUser>) -> Self {
        Self { users: Mutex::new(users), ..Self::default() }
    }

    /// Make every subsequent call fail with a network error.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize { self.list_calls.load(Ordering::SeqCst) }
    pub fn get_calls(&self) -> usize { self.get_calls.load(Ordering::SeqCst) }
    pub fn update_calls(&self) -> usize { self.update_calls.load(Ordering::SeqCst) }
    pub fn delete_calls(&self) -> usize { self.delete_calls.load(Ordering::SeqCst) }

    pub fn total_calls(&self) -> usize {
        self.list_calls() + self.get_calls() + self.update_calls() + self.delete_calls()
    }

    pub fn updates(&self) -> Vec<(i32, DirectoryUser)> { self.updates.lock().unwrap().clone() }

    fn check(&self) -> Result<(), CoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(CoreError::Network("directory unreachable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DirectoryPort for MockDirectory {
    async fn list_users(&self) -> Result<Vec<DirectoryUser>, CoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.users.lock().unwrap().clone())
    }

    async fn get_user(&self, id: i32) -> Result<Option<DirectoryUser>, CoreError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn update_user(&self, id: i32, user: &DirectoryUser) -> Result<(), CoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.updates.lock().unwrap().push((id, user.clone()));
        Ok(())
    }

    async fn delete_user(&self, id: i32) -> Result<(), CoreError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.users.lock().unwrap().retain(|u| u.id != Some(id));
        Ok(())
    }
}
