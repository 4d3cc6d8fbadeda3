//! UI Components
//!
//! Leptos components making up the wishlist widget.

mod wish_form;
mod wish_list;
mod wish_row;
mod clear_all_button;

pub use wish_form::WishForm;
pub use wish_list::WishList;
pub use wish_row::WishRow;
pub use clear_all_button::ClearAllButton;
