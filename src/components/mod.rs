//! UI components built with Leptos.
//!
//! - [`Workspace`] - Top-level layout (main entry point)
//! - [`chat`] - Assistant chat panel
//! - [`editor`] - Editor for the open file
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`sidebar`] - File tree with search
//! - [`terminal`] - Terminal emulator interface

pub mod chat;
pub mod editor;
pub mod icons;
pub mod sidebar;
pub mod terminal;
pub mod workspace;

pub use workspace::Workspace;
