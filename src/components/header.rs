//! Page header with title and description.

use leptos::prelude::*;

#[component]
pub fn Header(
    title: &'static str,
    description: &'static str,
    /// Extra layout classes appended to the header element.
    #[prop(optional)]
    layout_class: &'static str,
) -> impl IntoView {
    let class = if layout_class.is_empty() { "page-header".to_owned() } else { format!("page-header {layout_class}") };

    view! {
        <header class=class>
            <h1 class="page-header__title">{title}</h1>
            <p class="page-header__description">{description}</p>
        </header>
    }
}
