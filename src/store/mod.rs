//! Vault data access.
//!
//! ARCHITECTURE
//! ============
//! `VaultStore` is the seam between request handling and storage. Handlers
//! and services hold an `Arc<dyn VaultStore>` and never see which backend is
//! active: `PgVaultStore` for Postgres deployments, `MemoryVaultStore` for
//! fixture-backed local runs and tests.

pub mod memory;
pub mod pg;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Category, NewPasswordRecord, PasswordEntry, PasswordFilter, SessionUser};

pub use memory::MemoryVaultStore;
pub use pg::PgVaultStore;

/// Errors produced by store backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("fixture error: {0}")]
    Fixture(String),
}

/// Read and write operations the dashboard depends on.
#[async_trait]
pub trait VaultStore: Send + Sync {
    /// Resolve a session token to its user. `None` for unknown or expired tokens.
    async fn session_user(&self, token: &str) -> Result<Option<SessionUser>, StoreError>;

    /// The user's entries matching `filter`, newest first.
    async fn password_collection(
        &self,
        user_id: Uuid,
        filter: &PasswordFilter,
    ) -> Result<Vec<PasswordEntry>, StoreError>;

    /// Every category, in no guaranteed order.
    async fn categories(&self) -> Result<Vec<Category>, StoreError>;

    /// Unfiltered count of the user's entries.
    async fn total_passwords(&self, user_id: Uuid) -> Result<i64, StoreError>;

    /// Store a validated entry, assigning its id and timestamps.
    async fn insert_password(&self, record: NewPasswordRecord) -> Result<PasswordEntry, StoreError>;

    /// Reassign one of the user's entries to `category_id`. `None` if the
    /// entry does not exist or belongs to someone else.
    async fn update_password_category(
        &self,
        user_id: Uuid,
        password_id: &str,
        category_id: &str,
    ) -> Result<Option<PasswordEntry>, StoreError>;
}
