use super::*;
use crate::state::test_helpers::{self, OTHER_TOKEN, TEST_TOKEN, other_user_id, test_user_id};

fn seeded() -> MemoryVaultStore {
    MemoryVaultStore::new(test_helpers::seed_data())
}

fn ids(entries: &[PasswordEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

// =============================================================================
// sessions
// =============================================================================

#[tokio::test]
async fn session_user_resolves_known_token() {
    let store = seeded();
    let user = store.session_user(TEST_TOKEN).await.unwrap().unwrap();
    assert_eq!(user.id, test_user_id());
    assert_eq!(user.name, "Test User");

    let other = store.session_user(OTHER_TOKEN).await.unwrap().unwrap();
    assert_eq!(other.id, other_user_id());
}

#[tokio::test]
async fn session_user_rejects_unknown_token() {
    assert!(seeded().session_user("nope").await.unwrap().is_none());
}

// =============================================================================
// password_collection
// =============================================================================

#[tokio::test]
async fn collection_is_scoped_to_user_and_newest_first() {
    let store = seeded();
    let entries = store.password_collection(test_user_id(), &PasswordFilter::default()).await.unwrap();
    assert_eq!(ids(&entries), vec!["p3", "p2", "p1"]);
}

#[tokio::test]
async fn collection_filters_by_category_slug() {
    let store = seeded();
    let entries = store
        .password_collection(test_user_id(), &PasswordFilter::new("social", ""))
        .await
        .unwrap();
    assert_eq!(ids(&entries), vec!["p2"]);
}

#[tokio::test]
async fn collection_filters_by_search_term() {
    let store = seeded();
    let entries = store
        .password_collection(test_user_id(), &PasswordFilter::new("", "GIT"))
        .await
        .unwrap();
    assert_eq!(ids(&entries), vec!["p1"]);
}

#[tokio::test]
async fn collection_with_unknown_slug_is_empty() {
    let store = seeded();
    let entries = store
        .password_collection(test_user_id(), &PasswordFilter::new("missing", ""))
        .await
        .unwrap();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn total_counts_only_own_entries_ignoring_filters() {
    let store = seeded();
    assert_eq!(store.total_passwords(test_user_id()).await.unwrap(), 3);
    assert_eq!(store.total_passwords(other_user_id()).await.unwrap(), 1);
    assert_eq!(store.total_passwords(Uuid::new_v4()).await.unwrap(), 0);
}

#[tokio::test]
async fn categories_returns_all() {
    let categories = seeded().categories().await.unwrap();
    assert_eq!(categories.len(), 2);
}

// =============================================================================
// writes
// =============================================================================

#[tokio::test]
async fn insert_assigns_id_and_is_listed() {
    let store = seeded();
    let record = NewPasswordRecord {
        user_id: test_user_id(),
        website_name: "Mastodon".into(),
        category_id: "c1".into(),
        password: "toot".into(),
        email: None,
        username: None,
        url: None,
    };
    let created = store.insert_password(record).await.unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(created.created_at, created.updated_at);

    let entries = store.password_collection(test_user_id(), &PasswordFilter::default()).await.unwrap();
    assert_eq!(entries[0].id, created.id);
    assert_eq!(store.total_passwords(test_user_id()).await.unwrap(), 4);
}

#[tokio::test]
async fn update_category_moves_own_entry() {
    let store = seeded();
    let moved = store.update_password_category(test_user_id(), "p3", "c1").await.unwrap().unwrap();
    assert_eq!(moved.category_id, "c1");

    let social = store
        .password_collection(test_user_id(), &PasswordFilter::new("social", ""))
        .await
        .unwrap();
    assert_eq!(ids(&social), vec!["p3", "p2"]);
}

#[tokio::test]
async fn update_category_ignores_foreign_entry() {
    let store = seeded();
    assert!(store.update_password_category(test_user_id(), "p4", "c2").await.unwrap().is_none());
}

// =============================================================================
// fixtures
// =============================================================================

#[tokio::test]
async fn from_json_accepts_mixed_timestamp_forms() {
    let json = r#"{
        "users": [{"id": "00000000-0000-0000-0000-000000000001", "name": "Ada", "token": "t"}],
        "categories": [{"id": "c1", "name": "Social", "slug": "social",
                        "created_at": "2024-01-01T00:00:00Z", "updated_at": 1704067200000}],
        "passwords": [{"id": "p1", "website_name": "GitHub", "category_id": "c1",
                       "created_at": "1704067200000", "updated_at": "2024-01-01T00:00:00Z",
                       "password": "s", "user_id": "00000000-0000-0000-0000-000000000001"}]
    }"#;
    let store = MemoryVaultStore::from_json(json).unwrap();
    let user = store.session_user("t").await.unwrap().unwrap();
    let entries = store.password_collection(user.id, &PasswordFilter::default()).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].created_at, entries[0].updated_at);
    assert_eq!(entries[0].email, None);
}

#[test]
fn from_json_reports_malformed_fixture() {
    let err = MemoryVaultStore::from_json("{\"passwords\": 3}").err().unwrap();
    assert!(matches!(err, StoreError::Fixture(_)));
}

#[tokio::test]
async fn from_file_reports_missing_path() {
    let err = MemoryVaultStore::from_file(Path::new("/nonexistent/vault.json")).await.err().unwrap();
    assert!(err.to_string().contains("/nonexistent/vault.json"));
}
