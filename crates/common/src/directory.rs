//! HTTP adapter for the external user directory.
//!
//! The directory is a jsonplaceholder-style REST resource:
//! `GET {base}`, `GET {base}/{id}`, `PUT {base}/{id}`, `DELETE {base}/{id}`.

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::types::DirectoryUser;
use crate::CoreError;

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/users";

#[derive(Clone, Debug)]
pub struct DirectoryHttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl DirectoryHttpClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CoreError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CoreError::Network(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_string() })
    }

    pub fn base_url(&self) -> &str { &self.base_url }

    fn user_url(&self, id: i32) -> String {
        format!("{}/{id}", self.base_url)
    }

    /// Bulk listing. An empty or `null` body yields no users; records that
    /// do not decode are skipped.
    pub async fn list_users(&self) -> Result<Vec<DirectoryUser>, CoreError> {
        let resp = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(CoreError::Status(resp.status().as_u16()));
        }
        let body = resp.bytes().await.map_err(|e| CoreError::Network(e.to_string()))?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let records: Option<Vec<serde_json::Value>> =
            serde_json::from_slice(&body).map_err(|e| CoreError::Parse(e.to_string()))?;
        // One malformed record must not hide the rest of the listing.
        let users: Vec<DirectoryUser> = records
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value(record) {
                Ok(user) => Some(user),
                Err(e) => {
                    warn!(index, error = %e, "directory_record_skipped");
                    None
                }
            })
            .collect();
        debug!(count = users.len(), "directory_list");
        Ok(users)
    }

    /// Single lookup. `404`, an empty body, `null` and `{}` all mean absent.
    pub async fn get_user(&self, id: i32) -> Result<Option<DirectoryUser>, CoreError> {
        let resp = self
            .client
            .get(self.user_url(id))
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        if resp.status() == StatusCode::NOT_FOUND {
            debug!(id, "directory_user_absent");
            return Ok(None);
        }
        if !resp.status().is_success() {
            return Err(CoreError::Status(resp.status().as_u16()));
        }
        let body = resp.bytes().await.map_err(|e| CoreError::Network(e.to_string()))?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let value: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| CoreError::Parse(e.to_string()))?;
        match value {
            serde_json::Value::Null => Ok(None),
            serde_json::Value::Object(ref map) if map.is_empty() => Ok(None),
            other => serde_json::from_value(other)
                .map(Some)
                .map_err(|e| CoreError::Parse(e.to_string())),
        }
    }

    pub async fn update_user(&self, id: i32, user: &DirectoryUser) -> Result<(), CoreError> {
        let resp = self
            .client
            .put(self.user_url(id))
            .json(user)
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(CoreError::Status(resp.status().as_u16()));
        }
        Ok(())
    }

    pub async fn delete_user(&self, id: i32) -> Result<(), CoreError> {
        let resp = self
            .client
            .delete(self.user_url(id))
            .send()
            .await
            .map_err(|e| CoreError::Network(e.to_string()))?;
        if !resp.status().is_success() {
            return Err(CoreError::Status(resp.status().as_u16()));
        }
        Ok(())
    }
}
