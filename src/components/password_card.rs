//! Card for a single saved password.
//!
//! DESIGN
//! ======
//! The card carries its entry id in `data-key`, the same key the list uses
//! to identify it. The full category list feeds the move-category form.

use leptos::prelude::*;

use crate::models::{Category, PasswordView};

#[component]
pub fn PasswordCollectionCard(password: PasswordView, categories: Vec<Category>) -> impl IntoView {
    let key = password.key().to_owned();
    let PasswordView { entry, category, category_resolved } = password;
    let category_class = if category_resolved {
        "password-card__category"
    } else {
        "password-card__category password-card__category--unknown"
    };
    let move_action = format!("/dashboard/passwords/{}/category", entry.id);
    let current_category = category.id.clone();

    let options = categories
        .into_iter()
        .map(|option| {
            let selected = option.id == current_category;
            view! { <option value=option.id selected=selected>{option.name}</option> }
        })
        .collect_view();

    let username = entry.username.map(|username| {
        view! {
            <dt>"Username"</dt>
            <dd class="password-card__username">{username}</dd>
        }
    });
    let email = entry.email.map(|email| {
        view! {
            <dt>"Email"</dt>
            <dd class="password-card__email">{email}</dd>
        }
    });
    let url = entry.url.map(|url| {
        let href = url.clone();
        view! {
            <dt>"URL"</dt>
            <dd class="password-card__url">
                <a href=href target="_blank" rel="noopener noreferrer">{url}</a>
            </dd>
        }
    });

    view! {
        <article class="password-card" data-key=key>
            <header class="password-card__header">
                <h3 class="password-card__site">{entry.website_name}</h3>
                <span class=category_class data-slug=category.slug>{category.name}</span>
            </header>
            <dl class="password-card__details">
                {username}
                {email}
                {url}
                <dt>"Password"</dt>
                <dd>
                    <input class="password-card__secret" type="password" readonly=true value=entry.password/>
                </dd>
            </dl>
            <form class="password-card__move" method="post" action=move_action>
                <select name="category_id">{options}</select>
                <button type="submit">"Move"</button>
            </form>
        </article>
    }
}
