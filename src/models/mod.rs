//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Node`], [`NodeKind`], [`ManifestItem`] - Virtual filesystem representation
//! - [`Language`] - Editor syntax hint
//! - [`OutputLine`], [`Scrollback`] - Terminal output types
//! - [`ChatMessage`] - Assistant panel messages

mod chat;
mod filesystem;
mod terminal;

pub use chat::ChatMessage;
pub use filesystem::{Language, ManifestItem, ManifestKind, Node, NodeKind};
pub use terminal::{OutputLine, OutputLineData, Scrollback};
