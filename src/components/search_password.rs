//! Search box for the dashboard list. Submits `search` back to `/dashboard`,
//! carrying the active `category` slug along so a search narrows within it.

use leptos::prelude::*;

use crate::models::PasswordFilter;

#[component]
pub fn SearchPassword(
    /// Unfiltered number of saved entries.
    total: i64,
    /// Filter the current page was rendered with.
    #[prop(optional)]
    filter: PasswordFilter,
) -> impl IntoView {
    let placeholder = format!("Search {total} saved passwords");
    let current = filter.search_term().unwrap_or_default().to_owned();
    let category = filter.category_slug().map(|slug| {
        let slug = slug.to_owned();
        view! { <input type="hidden" name="category" value=slug/> }
    });

    view! {
        <form class="search-password" method="get" action="/dashboard" role="search">
            {category}
            <input
                class="search-password__input"
                type="search"
                name="search"
                placeholder=placeholder
                value=current
            />
            <span class="search-password__total">{total.to_string()}" saved"</span>
        </form>
    }
}
