//! Widget Mounting
//!
//! Locates the host element and attaches the widget to it once.

use thiserror::Error;
use wasm_bindgen::JsCast;

use crate::app::App;

/// Reasons the widget cannot be attached to the page
#[derive(Debug, Error, PartialEq)]
pub enum MountError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("host element #{0} not found")]
    HostNotFound(String),
    #[error("host element #{0} is not an HTML element")]
    HostNotHtmlElement(String),
}

/// Find the element with the given id in the current document
pub fn find_host(id: &str) -> Result<web_sys::HtmlElement, MountError> {
    let document = web_sys::window()
        .ok_or(MountError::NoWindow)?
        .document()
        .ok_or(MountError::NoDocument)?;

    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::HostNotFound(id.to_string()))?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| MountError::HostNotHtmlElement(id.to_string()))
}

/// Mount the wishlist into `#id` for the rest of the page session
pub fn mount_wishlist(id: &str) -> Result<(), MountError> {
    let host = find_host(id)?;
    leptos::mount::mount_to(host, App).forget();
    log::info!("[BOOT] Wishlist mounted into #{}", id);
    Ok(())
}
