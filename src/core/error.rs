//! Custom error types for the application.
//!
//! - [`ShellError`] - Recoverable command failures, printed as one terminal line
//! - [`SeedError`] - Seed manifest loading and validation failures

use thiserror::Error;

/// Command failures surfaced by the interpreter.
///
/// The `Display` text is the exact line the terminal prints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("No such directory: {0}")]
    NoSuchDirectory(String),
    #[error("No such file: {0}")]
    NoSuchFile(String),
    #[error("Command not found: {0}")]
    CommandNotFound(String),
}

/// Seed manifest errors.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("invalid seed manifest: {0}")]
    Json(#[from] serde_json::Error),
    #[error("empty entry name under '{parent}'")]
    EmptyName { parent: String },
    #[error("duplicate entry '{name}' under '{parent}'")]
    DuplicateName { parent: String, name: String },
    #[error("file '{0}' has children")]
    FileWithChildren(String),
    #[error("folder '{0}' has content")]
    FolderWithContent(String),
}
