//! Dashboard page listing the user's saved passwords.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The route handler loads a
//! `DashboardView` (entries already paired with categories) and this page
//! lays it out: header, search + add controls, then either one card per
//! entry or a single empty-state notice.

use leptos::prelude::*;

use crate::components::add_password_dialog::AddNewPasswordDialog;
use crate::components::empty_notice::EmptyNotice;
use crate::components::header::Header;
use crate::components::password_card::PasswordCollectionCard;
use crate::components::search_password::SearchPassword;
use crate::services::dashboard::DashboardView;

pub const TITLE: &str = "All Passwords";
pub const DESCRIPTION: &str = "Safely manage and access your passwords.";

#[component]
pub fn DashboardPage(dashboard: DashboardView) -> impl IntoView {
    let DashboardView { passwords, categories, total, filter } = dashboard;

    let listing = if passwords.is_empty() {
        view! { <EmptyNotice/> }.into_any()
    } else {
        passwords
            .into_iter()
            .map(|password| {
                let categories = categories.clone();
                view! { <PasswordCollectionCard password=password categories=categories/> }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <Header title=TITLE description=DESCRIPTION layout_class="mt-5"/>

        <div class="mb-6 flex items-center space-x-3">
            <SearchPassword total=total filter=filter/>
            <AddNewPasswordDialog categories=categories/>
        </div>

        <div class="space-y-2.5">{listing}</div>
    }
}

/// Render the dashboard as a complete HTML document.
pub fn render_dashboard(dashboard: DashboardView) -> String {
    super::render_document(TITLE, move || view! { <DashboardPage dashboard=dashboard/> })
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
