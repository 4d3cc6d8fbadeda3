//! Wish List Component
//!
//! Renders the wishes in order, or a placeholder when there are none.

use leptos::prelude::*;

use super::WishRow;
use crate::labels;
use crate::models::Wish;
use crate::store::{use_wishlist_store, WishlistState, WishlistStateStoreFields};

#[component]
pub fn WishList() -> impl IntoView {
    let store = use_wishlist_store();
    let has_wishes = move || !store.with(WishlistState::is_empty);

    view! {
        <Show
            when=has_wishes
            fallback=|| view! { <p class="empty-state">{labels::EMPTY_STATE}</p> }
        >
            <ul class="wish-list">
                <For
                    each=move || store.wishes().get()
                    key=|wish| wish.id
                    children=move |wish: Wish| view! { <WishRow wish=wish /> }
                />
            </ul>
        </Show>
    }
}
