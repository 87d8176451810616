//! Top-level IDE layout.

mod workspace;

pub use workspace::Workspace;
