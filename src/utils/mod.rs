//! Utility modules for browser integration.
//!
//! Provides:
//! - [`console`] - Console logging gated on the wasm32 target

pub mod console;
