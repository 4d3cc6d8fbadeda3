//! Wish Row Component

use leptos::prelude::*;

use crate::labels;
use crate::models::Wish;
use crate::store::{store_remove_wish, use_wishlist_store};

/// One wish with its delete button.
/// Long text is cut off by CSS; the full text stays in the hover title.
#[component]
pub fn WishRow(wish: Wish) -> impl IntoView {
    let store = use_wishlist_store();
    let id = wish.id;
    let text = wish.text;
    let title = text.clone();

    view! {
        <li class="wish-row">
            <span class="wish-text" title=title>{text}</span>
            <button
                type="button"
                class="delete-btn"
                on:click=move |_| {
                    store_remove_wish(&store, id);
                }
            >
                {labels::DELETE}
            </button>
        </li>
    }
}
