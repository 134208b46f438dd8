//! "Add new password" trigger and form.
//!
//! DESIGN
//! ======
//! Rendered as a `<details>` disclosure so the trigger works without client
//! script. The form posts to `/dashboard/passwords`, which redirects back to
//! the dashboard on success.

use leptos::prelude::*;

use crate::models::Category;

#[component]
pub fn AddNewPasswordDialog(categories: Vec<Category>) -> impl IntoView {
    let options = categories
        .into_iter()
        .map(|category| view! { <option value=category.id>{category.name}</option> })
        .collect_view();

    view! {
        <details class="add-password">
            <summary class="add-password__trigger">"Add New Password"</summary>
            <form class="add-password__form" method="post" action="/dashboard/passwords">
                <label>
                    "Website name"
                    <input type="text" name="website_name" required=true/>
                </label>
                <label>
                    "Password"
                    <input type="password" name="password" required=true/>
                </label>
                <label>
                    "Email"
                    <input type="email" name="email"/>
                </label>
                <label>
                    "Username"
                    <input type="text" name="username"/>
                </label>
                <label>
                    "URL"
                    <input type="url" name="url"/>
                </label>
                <label>
                    "Category"
                    <select name="category_id" required=true>
                        {options}
                    </select>
                </label>
                <button type="submit">"Save"</button>
            </form>
        </details>
    }
}
