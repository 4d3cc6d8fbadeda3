//! Wish Form Component
//!
//! Text input and submit button for new wishes.

use leptos::html;
use leptos::prelude::*;

use crate::labels;
use crate::store::{
    store_set_draft, store_submit_draft, use_wishlist_store, WishlistState, WishlistStateStoreFields,
};

/// Form for adding a wish. Enter in the input submits as well.
#[component]
pub fn WishForm() -> impl IntoView {
    let store = use_wishlist_store();
    let input_ref = NodeRef::<html::Input>::new();

    // Focus the input once, the first time it is attached
    Effect::new(move |focused: Option<bool>| {
        if focused == Some(true) {
            return true;
        }
        match input_ref.get() {
            Some(input) => {
                let _ = input.focus();
                true
            }
            None => false,
        }
    });

    let submit_disabled = move || !store.with(WishlistState::can_submit);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store_submit_draft(&store);
    };

    view! {
        <form class="wish-form" on:submit=submit>
            <input
                type="text"
                node_ref=input_ref
                placeholder=labels::INPUT_PLACEHOLDER
                prop:value=move || store.draft().get()
                on:input=move |ev| store_set_draft(&store, event_target_value(&ev))
            />
            <button type="submit" disabled=submit_disabled>
                {labels::SUBMIT}
            </button>
        </form>
    }
}
