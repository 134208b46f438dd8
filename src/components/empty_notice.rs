//! Empty-state notice shown when the dashboard list has no entries.

use leptos::prelude::*;

#[component]
pub fn EmptyNotice() -> impl IntoView {
    view! {
        <div class="alert alert--destructive" role="alert">
            <h5 class="alert__title">"No Password Found"</h5>
            <p class="alert__description">"Looks like you haven't added any passwords yet."</p>
        </div>
    }
}
