use super::*;
use crate::models::{Category, PasswordFilter, PasswordView};
use crate::services::dashboard::resolve_categories;
use crate::state::test_helpers::{category, entry, test_user_id};

fn dashboard(passwords: Vec<PasswordView>, categories: Vec<Category>, total: i64) -> DashboardView {
    DashboardView { passwords, categories, total, filter: PasswordFilter::default() }
}

fn card_count(html: &str) -> usize {
    html.matches(r#"class="password-card""#).count()
}

#[test]
fn empty_list_renders_single_notice_and_no_cards() {
    let html = render_dashboard(dashboard(Vec::new(), vec![category("c1", "Social", "social")], 0));

    assert_eq!(html.matches("No Password Found").count(), 1);
    assert_eq!(card_count(&html), 0);
}

#[test]
fn renders_one_card_per_entry_keyed_by_id() {
    let categories = vec![category("c1", "Social", "social"), category("c2", "Work", "work")];
    let entries = vec![
        entry("p1", "GitHub", "c2", test_user_id(), 0),
        entry("p2", "Twitter", "c1", test_user_id(), 1),
        entry("p3", "Forum", "cX", test_user_id(), 2),
    ];
    let passwords = resolve_categories(entries, &categories);
    let html = render_dashboard(dashboard(passwords, categories, 3));

    assert_eq!(card_count(&html), 3);
    for key in ["p1", "p2", "p3"] {
        assert_eq!(html.matches(&format!(r#"data-key="{key}""#)).count(), 1, "card key {key}");
    }
    assert!(!html.contains("No Password Found"));
}

#[test]
fn card_shows_resolved_category() {
    let categories = vec![category("c1", "Social", "social")];
    let passwords = resolve_categories(vec![entry("p1", "Twitter", "c1", test_user_id(), 0)], &categories);
    let html = render_dashboard(dashboard(passwords, categories, 1));

    assert!(html.contains(r#"data-slug="social""#));
    assert!(html.contains("Social"));
}

#[test]
fn card_shows_placeholder_category() {
    let categories = vec![category("c1", "Social", "social")];
    let passwords = resolve_categories(vec![entry("p2", "Forum", "cX", test_user_id(), 0)], &categories);
    let html = render_dashboard(dashboard(passwords, categories, 1));

    assert_eq!(card_count(&html), 1);
    assert!(html.contains(r#"data-slug="unknown""#));
    assert!(html.contains("Unknown"));
}

#[test]
fn header_and_controls_are_rendered() {
    let html = render_dashboard(dashboard(Vec::new(), vec![category("c1", "Social", "social")], 42));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(TITLE));
    assert!(html.contains(DESCRIPTION));
    assert!(html.contains("mt-5"));
    assert!(html.contains("Search 42 saved passwords"));
    assert!(html.contains("Add New Password"));
    assert!(html.contains(r#"value="c1""#));
}

#[test]
fn absent_optional_fields_render_nothing() {
    let categories = vec![category("c1", "Social", "social")];
    let passwords = resolve_categories(vec![entry("p1", "Twitter", "c1", test_user_id(), 0)], &categories);
    let html = render_dashboard(dashboard(passwords, categories, 1));

    assert!(!html.contains("password-card__username"));
    assert!(!html.contains("password-card__email"));
    assert!(!html.contains("password-card__url"));
    assert!(!html.contains("undefined"));
    assert!(!html.contains("None"));
}
