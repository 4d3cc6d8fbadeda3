//! Wishlist Frontend Entry Point

mod app;
mod components;
mod config;
mod labels;
mod models;
mod mount;
mod store;

use config::{LOG_LEVEL, MOUNT_ELEMENT_ID};

fn main() {
    console_error_panic_hook::set_once();
    // Logging is optional; the widget still mounts without it
    let _ = console_log::init_with_level(LOG_LEVEL);

    if let Err(err) = mount::mount_wishlist(MOUNT_ELEMENT_ID) {
        log::error!("[BOOT] Failed to mount wishlist: {}", err);
        wasm_bindgen::throw_str(&err.to_string());
    }
}
