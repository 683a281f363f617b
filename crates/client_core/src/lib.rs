//! HTTP client for the users REST API.
//!
//! [`UserDirectory`] is the seam the GUI worker programs against;
//! [`RestUserDirectory`] is the reqwest-backed implementation. Every
//! operation is a single request/response round trip: no retries, no
//! timeouts, no caching. Non-2xx statuses and transport failures both
//! surface as [`RequestError`].

use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{UserId, UserRecord},
    protocol::UserDraft,
};
use tracing::debug;

pub mod config;
pub mod error;

pub use config::{load_settings, Settings};
pub use error::RequestError;

#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn list_users(&self) -> Result<Vec<UserRecord>, RequestError>;
    async fn fetch_user(&self, user_id: UserId) -> Result<UserRecord, RequestError>;
    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, RequestError>;
    async fn update_user(&self, user_id: UserId, draft: &UserDraft)
        -> Result<UserRecord, RequestError>;
    async fn delete_user(&self, user_id: UserId) -> Result<bool, RequestError>;
}

pub struct RestUserDirectory {
    http: Client,
    users_url: String,
}

impl RestUserDirectory {
    /// `base_url` is the API prefix, e.g. `http://127.0.0.1:8080/api`; the
    /// `/users` collection segment is appended here.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base = base_url.into();
        Self {
            http: Client::new(),
            users_url: format!("{}/users", base.trim_end_matches('/')),
        }
    }

    fn user_url(&self, user_id: UserId) -> String {
        format!("{}/{}", self.users_url, user_id.0)
    }
}

#[async_trait]
impl UserDirectory for RestUserDirectory {
    async fn list_users(&self) -> Result<Vec<UserRecord>, RequestError> {
        let users: Vec<UserRecord> = self
            .http
            .get(&self.users_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(count = users.len(), "listed users");
        Ok(users)
    }

    async fn fetch_user(&self, user_id: UserId) -> Result<UserRecord, RequestError> {
        let user = self
            .http
            .get(self.user_url(user_id))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(user)
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<UserRecord, RequestError> {
        let created: UserRecord = self
            .http
            .post(&self.users_url)
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(user_id = created.id.0, "created user");
        Ok(created)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        draft: &UserDraft,
    ) -> Result<UserRecord, RequestError> {
        let updated: UserRecord = self
            .http
            .put(self.user_url(user_id))
            .json(draft)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(user_id = updated.id.0, "updated user");
        Ok(updated)
    }

    async fn delete_user(&self, user_id: UserId) -> Result<bool, RequestError> {
        self.http
            .delete(self.user_url(user_id))
            .send()
            .await?
            .error_for_status()?;
        debug!(user_id = user_id.0, "deleted user");
        Ok(true)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
