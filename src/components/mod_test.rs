use leptos::prelude::*;

use super::add_password_dialog::AddNewPasswordDialog;
use super::empty_notice::EmptyNotice;
use super::header::Header;
use super::password_card::PasswordCollectionCard;
use super::search_password::SearchPassword;
use crate::models::{Category, PasswordFilter, PasswordView};
use crate::pages::render_to_string;
use crate::state::test_helpers::{category, entry, test_user_id};

fn categories() -> Vec<Category> {
    vec![category("c1", "Social", "social"), category("c2", "Work", "work")]
}

// =============================================================================
// Header
// =============================================================================

#[test]
fn header_renders_title_description_and_layout_class() {
    let html = render_to_string(|| view! { <Header title="Title" description="Desc" layout_class="mt-5"/> });
    assert!(html.contains(r#"class="page-header mt-5""#));
    assert!(html.contains("Title"));
    assert!(html.contains("Desc"));
}

#[test]
fn header_without_layout_class() {
    let html = render_to_string(|| view! { <Header title="Title" description="Desc"/> });
    assert!(html.contains(r#"class="page-header""#));
}

// =============================================================================
// SearchPassword / AddNewPasswordDialog / EmptyNotice
// =============================================================================

#[test]
fn search_targets_dashboard_with_search_param() {
    let html = render_to_string(|| view! { <SearchPassword total=7/> });
    assert!(html.contains(r#"action="/dashboard""#));
    assert!(html.contains(r#"name="search""#));
    assert!(html.contains("Search 7 saved passwords"));
    assert!(!html.contains(r#"name="category""#));
}

#[test]
fn search_keeps_active_category_and_term() {
    let filter = PasswordFilter::new("social", "git");
    let html = render_to_string(move || view! { <SearchPassword total=7 filter=filter/> });
    assert!(html.contains(r#"type="hidden""#));
    assert!(html.contains(r#"name="category""#));
    assert!(html.contains(r#"value="social""#));
    assert!(html.contains(r#"value="git""#));
}

#[test]
fn search_without_category_omits_hidden_field() {
    let filter = PasswordFilter::new("  ", "git");
    let html = render_to_string(move || view! { <SearchPassword total=7 filter=filter/> });
    assert!(!html.contains(r#"name="category""#));
    assert!(html.contains(r#"value="git""#));
}

#[test]
fn add_dialog_lists_every_category() {
    let html = render_to_string(|| view! { <AddNewPasswordDialog categories=categories()/> });
    assert!(html.contains(r#"action="/dashboard/passwords""#));
    assert_eq!(html.matches("<option").count(), 2);
    assert!(html.contains(r#"value="c1""#));
    assert!(html.contains(r#"value="c2""#));
}

#[test]
fn empty_notice_has_title_and_description() {
    let html = render_to_string(|| view! { <EmptyNotice/> });
    assert!(html.contains("No Password Found"));
    assert!(html.contains("added any passwords yet."));
}

// =============================================================================
// PasswordCollectionCard
// =============================================================================

#[test]
fn card_renders_present_optional_fields() {
    let mut record = entry("p1", "GitHub", "c2", test_user_id(), 0);
    record.username = Some("octocat".into());
    record.email = Some("octo@example.com".into());
    record.url = Some("https://github.com".into());
    let password = PasswordView::new(record, category("c2", "Work", "work"));

    let html = render_to_string(move || view! { <PasswordCollectionCard password=password categories=categories()/> });
    assert!(html.contains(r#"data-key="p1""#));
    assert!(html.contains("octocat"));
    assert!(html.contains("octo@example.com"));
    assert!(html.contains(r#"href="https://github.com""#));
    assert!(html.contains(r#"action="/dashboard/passwords/p1/category""#));
}

#[test]
fn card_preselects_current_category() {
    let password = PasswordView::new(entry("p1", "GitHub", "c2", test_user_id(), 0), category("c2", "Work", "work"));

    let html = render_to_string(move || view! { <PasswordCollectionCard password=password categories=categories()/> });
    assert_eq!(html.matches("selected").count(), 1);
    let selected_at = html.find("selected").unwrap();
    let option_start = html[..selected_at].rfind("<option").unwrap();
    assert!(html[option_start..selected_at].contains(r#"value="c2""#));
}

#[test]
fn card_masks_secret_in_password_input() {
    let password = PasswordView::new(entry("p1", "GitHub", "c2", test_user_id(), 0), category("c2", "Work", "work"));

    let html = render_to_string(move || view! { <PasswordCollectionCard password=password categories=Vec::new()/> });
    assert!(html.contains(r#"type="password""#));
    assert!(html.contains("p1-secret"));
}

#[test]
fn card_marks_only_unresolved_category_as_unknown() {
    let stored = category("c9", "Unknown", "unknown");
    let real = PasswordView::new(entry("p1", "GitHub", "c9", test_user_id(), 0), stored);
    let html = render_to_string(move || view! { <PasswordCollectionCard password=real categories=Vec::new()/> });
    assert!(!html.contains("password-card__category--unknown"));

    let dangling = PasswordView::unresolved(entry("p2", "Forum", "cX", test_user_id(), 0));
    let html = render_to_string(move || view! { <PasswordCollectionCard password=dangling categories=Vec::new()/> });
    assert!(html.contains("password-card__category--unknown"));
}
