//! Core business logic for the shell.
//!
//! This module provides:
//! - [`VirtualFs`] virtual filesystem storage and path resolution
//! - [`CommandResult`] and its [`Effect`]
//! - [`Session`] the explicit per-user context with line editing
//! - [`assistant`] scripted chat replies

pub mod assistant;
mod commands;
pub mod error;
mod filesystem;
pub mod input;
pub mod parser;
mod session;

pub use commands::{CommandResult, Effect};
pub use filesystem::VirtualFs;
pub use session::{KeyOutcome, Session};
