//! Password write actions reachable from the dashboard: create an entry from
//! the add-password dialog, move an entry to another category from its card.

use tracing::info;
use uuid::Uuid;

use crate::models::{NewPassword, NewPasswordRecord, PasswordEntry, normalize_optional};
use crate::store::{StoreError, VaultStore};

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("invalid input: {0}")]
    Validation(&'static str),
    #[error("category not found: {0}")]
    UnknownCategory(String),
    #[error("password not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

async fn ensure_category(store: &dyn VaultStore, category_id: &str) -> Result<(), PasswordError> {
    let categories = store.categories().await?;
    if categories.iter().any(|c| c.id == category_id) {
        Ok(())
    } else {
        Err(PasswordError::UnknownCategory(category_id.to_owned()))
    }
}

/// Validate `input` and store it as a new entry owned by `user_id`.
///
/// # Errors
///
/// Returns `Validation` for a blank website name or password,
/// `UnknownCategory` if the category does not exist, or a store error.
pub async fn create_password(
    store: &dyn VaultStore,
    user_id: Uuid,
    input: NewPassword,
) -> Result<PasswordEntry, PasswordError> {
    let website_name = input.website_name.trim();
    if website_name.is_empty() {
        return Err(PasswordError::Validation("website name is required"));
    }
    if input.password.is_empty() {
        return Err(PasswordError::Validation("password is required"));
    }
    let category_id = input.category_id.trim();
    if category_id.is_empty() {
        return Err(PasswordError::Validation("category is required"));
    }
    ensure_category(store, category_id).await?;

    let record = NewPasswordRecord {
        user_id,
        website_name: website_name.to_owned(),
        category_id: category_id.to_owned(),
        password: input.password,
        email: normalize_optional(input.email),
        username: normalize_optional(input.username),
        url: normalize_optional(input.url),
    };
    let entry = store.insert_password(record).await?;
    info!(password_id = %entry.id, %user_id, "password created");
    Ok(entry)
}

/// Reassign one of the user's entries to another existing category.
///
/// # Errors
///
/// Returns `UnknownCategory` if the target category does not exist,
/// `NotFound` if the entry is missing or owned by another user, or a store error.
pub async fn move_password(
    store: &dyn VaultStore,
    user_id: Uuid,
    password_id: &str,
    category_id: &str,
) -> Result<PasswordEntry, PasswordError> {
    ensure_category(store, category_id).await?;

    let entry = store
        .update_password_category(user_id, password_id, category_id)
        .await?
        .ok_or_else(|| PasswordError::NotFound(password_id.to_owned()))?;
    info!(password_id, category_id, %user_id, "password moved");
    Ok(entry)
}

#[cfg(test)]
#[path = "passwords_test.rs"]
mod tests;
