//! Clear All Button Component

use leptos::prelude::*;

use crate::labels;
use crate::store::{store_clear_wishes, use_wishlist_store, WishlistState};

/// Empties the list in one click. Hidden while the list is empty.
#[component]
pub fn ClearAllButton() -> impl IntoView {
    let store = use_wishlist_store();

    view! {
        <Show when=move || !store.with(WishlistState::is_empty)>
            <button
                type="button"
                class="clear-btn"
                on:click=move |_| {
                    store_clear_wishes(&store);
                }
            >
                {labels::CLEAR_ALL}
            </button>
        </Show>
    }
}
