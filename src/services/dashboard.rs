//! Dashboard service: load everything the dashboard renders in one pass.
//!
//! DESIGN
//! ======
//! The filtered entries, the category list, and the user's total count are
//! independent reads, so they are issued together and jointly awaited. The
//! first failure drops the other two futures and propagates; nothing is
//! rendered from partial data.
//!
//! ERROR HANDLING
//! ==============
//! An entry whose `category_id` matches no category is not an error for the
//! page: it is logged and paired with `Category::placeholder`. No entry is
//! ever dropped over a dangling reference.

use std::collections::HashMap;

use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use crate::models::{Category, PasswordEntry, PasswordFilter, PasswordView};
use crate::store::{StoreError, VaultStore};

/// Everything the dashboard page renders.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub passwords: Vec<PasswordView>,
    pub categories: Vec<Category>,
    /// Unfiltered count of the user's entries.
    pub total: i64,
    pub filter: PasswordFilter,
}

/// Fetch entries, categories and the total concurrently, then resolve each
/// entry's category.
///
/// # Errors
///
/// Returns the first `StoreError` raised by any of the three reads.
pub async fn load_dashboard(
    store: &dyn VaultStore,
    user_id: Uuid,
    filter: PasswordFilter,
) -> Result<DashboardView, StoreError> {
    let (entries, categories, total) = tokio::try_join!(
        store.password_collection(user_id, &filter),
        store.categories(),
        store.total_passwords(user_id),
    )?;

    let passwords = resolve_categories(entries, &categories);
    Ok(DashboardView { passwords, categories, total, filter })
}

/// Pair every entry with its category by exact id match, substituting a
/// placeholder for ids that do not resolve. Order of `entries` is preserved.
#[must_use]
pub fn resolve_categories(entries: Vec<PasswordEntry>, categories: &[Category]) -> Vec<PasswordView> {
    let by_id: HashMap<&str, &Category> = categories.iter().map(|c| (c.id.as_str(), c)).collect();

    entries
        .into_iter()
        .map(|entry| match by_id.get(entry.category_id.as_str()) {
            Some(category) => PasswordView::new(entry, (*category).clone()),
            None => {
                error!(
                    category_id = %entry.category_id,
                    password_id = %entry.id,
                    "category with ID {} not found",
                    entry.category_id
                );
                PasswordView::unresolved(entry)
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
