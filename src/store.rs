//! Wishlist State Store
//!
//! Widget-local state kept in a reactive_stores Store so the draft and the
//! list re-render independently.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{is_blank, Wish, WishId};

/// Draft input plus the wishes submitted so far
#[derive(Clone, Debug, Default, Store)]
pub struct WishlistState {
    /// Text field content, not yet submitted
    pub draft: String,
    /// Insertion-ordered, newest last
    pub wishes: Vec<Wish>,
}

impl WishlistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submit is enabled only for a draft with visible text
    pub fn can_submit(&self) -> bool {
        !is_blank(&self.draft)
    }

    pub fn is_empty(&self) -> bool {
        self.wishes.is_empty()
    }

    /// Append the draft as a new wish and reset the draft.
    /// A blank draft leaves everything untouched.
    pub fn submit(&mut self) -> Option<WishId> {
        let wish = Wish::from_draft(&self.draft)?;
        let id = wish.id;
        self.wishes.push(wish);
        self.draft.clear();
        Some(id)
    }

    /// Remove the wish with the given id, keeping the order of the rest
    pub fn remove(&mut self, id: WishId) -> bool {
        let before = self.wishes.len();
        self.wishes.retain(|wish| wish.id != id);
        self.wishes.len() != before
    }

    /// Drop every wish, returning how many were removed
    pub fn clear(&mut self) -> usize {
        std::mem::take(&mut self.wishes).len()
    }
}

/// Type alias for the store
pub type WishlistStore = Store<WishlistState>;

/// Get the wishlist store from context
pub fn use_wishlist_store() -> WishlistStore {
    expect_context::<WishlistStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the draft with the full text field content
pub fn store_set_draft(store: &WishlistStore, text: String) {
    store.update(|state| state.set_draft(text));
}

/// Submit the current draft. Returns the new wish id, or None for a blank draft.
pub fn store_submit_draft(store: &WishlistStore) -> Option<WishId> {
    if !store.with_untracked(WishlistState::can_submit) {
        return None;
    }
    let id = store.try_update(|state| state.submit()).flatten()?;
    log::debug!("[WISHLIST] Added wish {}", id);
    Some(id)
}

/// Remove a wish by id. Unknown ids are ignored.
pub fn store_remove_wish(store: &WishlistStore, id: WishId) -> bool {
    let removed = store.try_update(|state| state.remove(id)).unwrap_or(false);
    if removed {
        log::debug!("[WISHLIST] Removed wish {}", id);
    } else {
        log::debug!("[WISHLIST] Wish {} not found, nothing removed", id);
    }
    removed
}

/// Clear the whole list
pub fn store_clear_wishes(store: &WishlistStore) -> usize {
    let cleared = store.try_update(WishlistState::clear).unwrap_or(0);
    log::debug!("[WISHLIST] Cleared {} wishes", cleared);
    cleared
}
