//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped layout and delegates rendering details to
//! `components`. Pages are rendered to complete HTML documents on the
//! server; there is no client-side hydration.

pub mod dashboard;

use leptos::prelude::*;

/// Document shell shared by every page.
#[component]
pub fn Document(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
            </head>
            <body>
                <main class="container">{children()}</main>
            </body>
        </html>
    }
}

/// Render a view to an HTML string inside a fresh reactive owner.
pub fn render_to_string<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

/// Render a complete page, prefixed with the HTML5 doctype.
pub fn render_document<F, V>(title: &'static str, body: F) -> String
where
    F: FnOnce() -> V + Send + 'static,
    V: IntoView + 'static,
{
    let html = render_to_string(move || view! { <Document title=title>{body()}</Document> });
    format!("<!DOCTYPE html>{html}")
}
