//! Browser console logging.
//!
//! Calls are compiled out on non-wasm targets so native tests never reach
//! into JavaScript.

/// Log a debug message to the browser console.
pub fn debug(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::debug_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&message.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
