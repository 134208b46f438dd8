//! Vault domain types shared by the store, the dashboard service, and views.
//!
//! DESIGN
//! ======
//! Entries and categories are read-only snapshots loaded per request. The
//! dashboard enriches each entry with its category to form a `PasswordView`;
//! entries whose category id does not resolve get a placeholder category so
//! rendering never depends on referential integrity of stored data.

pub mod timestamp;

use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Display name of the stand-in category for unresolved category ids.
pub const UNKNOWN_CATEGORY_NAME: &str = "Unknown";
/// Slug of the stand-in category for unresolved category ids.
pub const UNKNOWN_CATEGORY_SLUG: &str = "unknown";

// =============================================================================
// CATEGORY
// =============================================================================

/// A grouping label applied to entries. Mirrors the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// URL-safe identifier used by the `category` dashboard filter.
    pub slug: String,
    #[serde(with = "timestamp")]
    pub created_at: OffsetDateTime,
    #[serde(with = "timestamp")]
    pub updated_at: OffsetDateTime,
}

impl Category {
    /// Build the stand-in category for an entry whose `category_id` matches
    /// no known category. The id is kept so the dangling reference stays visible.
    #[must_use]
    pub fn placeholder(category_id: &str) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: category_id.to_owned(),
            name: UNKNOWN_CATEGORY_NAME.to_owned(),
            slug: UNKNOWN_CATEGORY_SLUG.to_owned(),
            created_at: now,
            updated_at: now,
        }
    }
}

// =============================================================================
// PASSWORD ENTRY
// =============================================================================

/// A saved password record. Mirrors the `passwords` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordEntry {
    pub id: String,
    pub website_name: String,
    pub category_id: String,
    #[serde(with = "timestamp")]
    pub created_at: OffsetDateTime,
    #[serde(with = "timestamp")]
    pub updated_at: OffsetDateTime,
    pub password: String,
    #[serde(default, deserialize_with = "optional_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub username: Option<String>,
    #[serde(default, deserialize_with = "optional_text")]
    pub url: Option<String>,
    pub user_id: Uuid,
}

/// Render-only view model: an entry plus its resolved (or placeholder) category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PasswordView {
    #[serde(flatten)]
    pub entry: PasswordEntry,
    pub category: Category,
    /// `false` when `category` is a placeholder for a dangling `category_id`.
    pub category_resolved: bool,
}

impl PasswordView {
    /// Pair an entry with the category its `category_id` resolved to.
    #[must_use]
    pub fn new(entry: PasswordEntry, category: Category) -> Self {
        Self { entry, category, category_resolved: true }
    }

    /// Pair an entry with a placeholder for its unresolved `category_id`.
    #[must_use]
    pub fn unresolved(entry: PasswordEntry) -> Self {
        let category = Category::placeholder(&entry.category_id);
        Self { entry, category, category_resolved: false }
    }

    /// Stable render key for the entry's card.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.entry.id
    }
}

// =============================================================================
// FILTERS AND INPUTS
// =============================================================================

/// Dashboard query filters. Absent parameters deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordFilter {
    /// Category slug; empty means all categories.
    pub category: String,
    /// Case-insensitive substring of the website name; empty means no search.
    pub search: String,
}

impl PasswordFilter {
    #[must_use]
    pub fn new(category: impl Into<String>, search: impl Into<String>) -> Self {
        Self { category: category.into(), search: search.into() }
    }

    /// Category slug to filter on, if any.
    #[must_use]
    pub fn category_slug(&self) -> Option<&str> {
        non_blank(&self.category)
    }

    /// Trimmed search term, if any.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        non_blank(&self.search)
    }

    /// Whether `entry` passes this filter. `category` is the entry's resolved
    /// category, `None` when its id is dangling (never matches a slug filter).
    #[must_use]
    pub fn matches(&self, entry: &PasswordEntry, category: Option<&Category>) -> bool {
        if let Some(slug) = self.category_slug() {
            if category.is_none_or(|c| c.slug != slug) {
                return false;
            }
        }
        match self.search_term() {
            Some(term) => entry.website_name.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        }
    }
}

/// Form input for a new entry, as submitted by the add-password dialog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPassword {
    pub website_name: String,
    pub password: String,
    pub category_id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A validated entry ready to be stored. The store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPasswordRecord {
    pub user_id: Uuid,
    pub website_name: String,
    pub category_id: String,
    pub password: String,
    pub email: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
}

/// User resolved from a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionUser {
    pub id: Uuid,
    pub name: String,
}

// =============================================================================
// NORMALIZATION
// =============================================================================

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Collapse blank optional text to `None` and trim the rest.
#[must_use]
pub fn normalize_optional(raw: Option<String>) -> Option<String> {
    raw.as_deref().and_then(non_blank).map(str::to_owned)
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(normalize_optional)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
