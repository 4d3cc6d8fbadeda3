//! Wishlist App
//!
//! Root component: owns the store and lays out the widget.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ClearAllButton, WishForm, WishList};
use crate::labels;
use crate::store::WishlistState;

#[component]
pub fn App() -> impl IntoView {
    // State lives as long as this mount
    provide_context(Store::new(WishlistState::new()));

    view! {
        <div class="wishlist">
            <h1>{labels::TITLE}</h1>
            <WishForm />
            <WishList />
            <ClearAllButton />
        </div>
    }
}
