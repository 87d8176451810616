//! Plain-text editor for the open file.

mod editor;

pub use editor::Editor;
