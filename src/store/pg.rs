//! Postgres-backed vault store.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{StoreError, VaultStore};
use crate::models::{Category, NewPasswordRecord, PasswordEntry, PasswordFilter, SessionUser, normalize_optional};

const PASSWORD_COLUMNS: &str =
    "p.id, p.website_name, p.category_id, p.created_at, p.updated_at, p.password, p.email, p.username, p.url, p.user_id";

pub struct PgVaultStore {
    pool: PgPool,
}

impl PgVaultStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside `ILIKE`.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn row_to_entry(row: &PgRow) -> Result<PasswordEntry, sqlx::Error> {
    Ok(PasswordEntry {
        id: row.try_get("id")?,
        website_name: row.try_get("website_name")?,
        category_id: row.try_get("category_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
        password: row.try_get("password")?,
        email: normalize_optional(row.try_get("email")?),
        username: normalize_optional(row.try_get("username")?),
        url: normalize_optional(row.try_get("url")?),
        user_id: row.try_get("user_id")?,
    })
}

fn row_to_category(row: &PgRow) -> Result<Category, sqlx::Error> {
    Ok(Category {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        slug: row.try_get("slug")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl VaultStore for PgVaultStore {
    async fn session_user(&self, token: &str) -> Result<Option<SessionUser>, StoreError> {
        let row = sqlx::query(
            r"SELECT u.id, u.name
              FROM sessions s
              JOIN users u ON u.id = s.user_id
              WHERE s.token = $1 AND s.expires_at > now()",
        )
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        let user = row
            .map(|r| -> Result<SessionUser, sqlx::Error> { Ok(SessionUser { id: r.try_get("id")?, name: r.try_get("name")? }) })
            .transpose()?;
        Ok(user)
    }

    async fn password_collection(
        &self,
        user_id: Uuid,
        filter: &PasswordFilter,
    ) -> Result<Vec<PasswordEntry>, StoreError> {
        let slug = filter.category_slug().unwrap_or_default();
        let search = filter.search_term().map(escape_like).unwrap_or_default();

        // Dangling category ids never satisfy a slug filter (LEFT JOIN yields NULL).
        let sql = format!(
            r"SELECT {PASSWORD_COLUMNS}
              FROM passwords p
              LEFT JOIN categories c ON c.id = p.category_id
              WHERE p.user_id = $1
                AND ($2::text = '' OR c.slug = $2::text)
                AND ($3::text = '' OR p.website_name ILIKE '%' || $3::text || '%')
              ORDER BY p.created_at DESC, p.id"
        );
        let rows = sqlx::query(&sql)
            .bind(user_id)
            .bind(slug)
            .bind(search)
            .fetch_all(&self.pool)
            .await?;

        let entries = rows.iter().map(row_to_entry).collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    async fn categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = sqlx::query("SELECT id, name, slug, created_at, updated_at FROM categories ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        let categories = rows.iter().map(row_to_category).collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    async fn total_passwords(&self, user_id: Uuid) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM passwords WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn insert_password(&self, record: NewPasswordRecord) -> Result<PasswordEntry, StoreError> {
        let id = Uuid::new_v4().to_string();
        let row = sqlx::query(
            r"INSERT INTO passwords AS p (id, website_name, category_id, password, email, username, url, user_id)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
              RETURNING p.id, p.website_name, p.category_id, p.created_at, p.updated_at,
                        p.password, p.email, p.username, p.url, p.user_id",
        )
        .bind(&id)
        .bind(&record.website_name)
        .bind(&record.category_id)
        .bind(&record.password)
        .bind(&record.email)
        .bind(&record.username)
        .bind(&record.url)
        .bind(record.user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(row_to_entry(&row)?)
    }

    async fn update_password_category(
        &self,
        user_id: Uuid,
        password_id: &str,
        category_id: &str,
    ) -> Result<Option<PasswordEntry>, StoreError> {
        let sql = format!(
            r"UPDATE passwords AS p
              SET category_id = $3, updated_at = now()
              WHERE p.id = $1 AND p.user_id = $2
              RETURNING {PASSWORD_COLUMNS}"
        );
        let row = sqlx::query(&sql)
            .bind(password_id)
            .bind(user_id)
            .bind(category_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(row_to_entry).transpose()?)
    }
}

#[cfg(test)]
#[path = "pg_test.rs"]
mod tests;
