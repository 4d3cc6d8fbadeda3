//! Startup Configuration

use log::Level;

/// Id of the host element the widget mounts into (see index.html)
pub const MOUNT_ELEMENT_ID: &str = "root";

/// Console log level
#[cfg(debug_assertions)]
pub const LOG_LEVEL: Level = Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: Level = Level::Info;
