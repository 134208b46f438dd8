//! In-memory vault store.
//!
//! DESIGN
//! ======
//! Holds a `VaultData` snapshot behind a `RwLock`. Data can be seeded from a
//! JSON fixture (see `VaultData`), which makes the dashboard runnable without
//! Postgres and gives tests a real `VaultStore` to drive.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde::Deserialize;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, VaultStore};
use crate::models::{Category, NewPasswordRecord, PasswordEntry, PasswordFilter, SessionUser};

/// A user known to the in-memory store, with the session token that
/// authenticates them.
#[derive(Debug, Clone, Deserialize)]
pub struct FixtureUser {
    pub id: Uuid,
    pub name: String,
    pub token: String,
}

/// Full contents of an in-memory vault. Fixture files use this shape:
///
/// ```json
/// { "users": [...], "categories": [...], "passwords": [...] }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VaultData {
    #[serde(default)]
    pub users: Vec<FixtureUser>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub passwords: Vec<PasswordEntry>,
}

pub struct MemoryVaultStore {
    data: RwLock<VaultData>,
}

impl MemoryVaultStore {
    #[must_use]
    pub fn new(data: VaultData) -> Self {
        Self { data: RwLock::new(data) }
    }

    /// Parse a JSON fixture.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fixture` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let data: VaultData = serde_json::from_str(json).map_err(|e| StoreError::Fixture(e.to_string()))?;
        Ok(Self::new(data))
    }

    /// Load a JSON fixture from disk.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Fixture` if the file cannot be read or parsed.
    pub async fn from_file(path: &Path) -> Result<Self, StoreError> {
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| StoreError::Fixture(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }
}

#[async_trait]
impl VaultStore for MemoryVaultStore {
    async fn session_user(&self, token: &str) -> Result<Option<SessionUser>, StoreError> {
        let data = self.data.read().await;
        Ok(data
            .users
            .iter()
            .find(|u| u.token == token)
            .map(|u| SessionUser { id: u.id, name: u.name.clone() }))
    }

    async fn password_collection(
        &self,
        user_id: Uuid,
        filter: &PasswordFilter,
    ) -> Result<Vec<PasswordEntry>, StoreError> {
        let data = self.data.read().await;
        let categories: HashMap<&str, &Category> = data.categories.iter().map(|c| (c.id.as_str(), c)).collect();

        let mut entries: Vec<PasswordEntry> = data
            .passwords
            .iter()
            .filter(|p| p.user_id == user_id)
            .filter(|p| filter.matches(p, categories.get(p.category_id.as_str()).copied()))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(entries)
    }

    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.data.read().await.categories.clone())
    }

    async fn total_passwords(&self, user_id: Uuid) -> Result<i64, StoreError> {
        let data = self.data.read().await;
        let count = data.passwords.iter().filter(|p| p.user_id == user_id).count();
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn insert_password(&self, record: NewPasswordRecord) -> Result<PasswordEntry, StoreError> {
        let now = OffsetDateTime::now_utc();
        let entry = PasswordEntry {
            id: Uuid::new_v4().to_string(),
            website_name: record.website_name,
            category_id: record.category_id,
            created_at: now,
            updated_at: now,
            password: record.password,
            email: record.email,
            username: record.username,
            url: record.url,
            user_id: record.user_id,
        };
        self.data.write().await.passwords.push(entry.clone());
        Ok(entry)
    }

    async fn update_password_category(
        &self,
        user_id: Uuid,
        password_id: &str,
        category_id: &str,
    ) -> Result<Option<PasswordEntry>, StoreError> {
        let mut data = self.data.write().await;
        let Some(entry) = data
            .passwords
            .iter_mut()
            .find(|p| p.id == password_id && p.user_id == user_id)
        else {
            return Ok(None);
        };
        category_id.clone_into(&mut entry.category_id);
        entry.updated_at = OffsetDateTime::now_utc();
        Ok(Some(entry.clone()))
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
