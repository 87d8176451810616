//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `execute_line` for running one submitted line
//!
//! # Architecture
//!
//! Input is tokenized by [`parse_input`], mapped onto the closed `Command`
//! enum by [`Command::parse`], then run by `execute_command`. Unrecognized
//! verbs become `Command::Unknown` instead of failing the lookup.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::{CommandResult, Effect};

use std::fmt;

use crate::core::VirtualFs;
use crate::core::parser::parse_input;
use crate::utils::console;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.md`).
///
/// The path is stored as typed. It is joined onto the working directory and
/// resolved during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for PathArg {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    /// List a folder; `None` lists the working directory
    Ls(Option<PathArg>),
    Cd(PathArg),
    Cat(PathArg),
    Pwd,
    Echo(String),
    Clear,
    /// Unrecognized verb, as typed
    Unknown(String),
}

impl Command {
    /// Parse command from name and arguments.
    ///
    /// The name is matched case-insensitively. Extra positional arguments
    /// are ignored by every command except `echo`.
    pub fn parse(name: &str, args: &[String]) -> Self {
        let first_path = || PathArg::new(args.first().cloned().unwrap_or_default());

        match name.to_lowercase().as_str() {
            "help" => Self::Help,
            "ls" => Self::Ls(args.first().map(PathArg::new)),
            "cd" => Self::Cd(first_path()),
            "cat" => Self::Cat(first_path()),
            "pwd" => Self::Pwd,
            "echo" => Self::Echo(args.join(" ")),
            "clear" => Self::Clear,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

// =============================================================================
// Line Execution
// =============================================================================

/// Tokenize, dispatch and execute one submitted line.
///
/// Blank input dispatches nothing and returns an empty result.
pub fn execute_line(input: &str, fs: &VirtualFs, current_path: &str) -> CommandResult {
    let Some(parsed) = parse_input(input) else {
        return CommandResult::empty();
    };

    let cmd = Command::parse(&parsed.name, &parsed.args);
    console::debug(&format!("{} $ {:?}", current_path, cmd));
    execute_command(cmd, fs, current_path)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(strs: &[&str]) -> Vec<String> {
        strs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_ls() {
        assert_eq!(Command::parse("ls", &[]), Command::Ls(None));
        assert!(matches!(
            Command::parse("ls", &args(&["src"])),
            Command::Ls(Some(ref p)) if p == "src"
        ));
    }

    #[test]
    fn test_parse_cd() {
        assert!(matches!(
            Command::parse("cd", &args(&[".."])),
            Command::Cd(ref p) if p == ".."
        ));
        assert!(matches!(Command::parse("cd", &[]), Command::Cd(ref p) if p.is_empty()));
    }

    #[test]
    fn test_parse_cat() {
        assert!(matches!(
            Command::parse("cat", &args(&["package.json", "ignored"])),
            Command::Cat(ref f) if f == "package.json"
        ));
    }

    #[test]
    fn test_parse_echo_rejoins() {
        assert_eq!(
            Command::parse("echo", &args(&["a", "b", "c"])),
            Command::Echo("a b c".to_string())
        );
        assert_eq!(Command::parse("echo", &[]), Command::Echo(String::new()));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Command::parse("LS", &[]), Command::Ls(None));
        assert_eq!(Command::parse("HELP", &[]), Command::Help);
        assert_eq!(Command::parse("CleAr", &[]), Command::Clear);
        assert_eq!(Command::parse("Pwd", &[]), Command::Pwd);
    }

    #[test]
    fn test_parse_unknown_keeps_spelling() {
        assert_eq!(
            Command::parse("FooBar", &[]),
            Command::Unknown("FooBar".to_string())
        );
        // No aliases.
        assert!(matches!(Command::parse("cls", &[]), Command::Unknown(_)));
        assert!(matches!(Command::parse("?", &[]), Command::Unknown(_)));
    }

    #[test]
    fn test_command_names_round_trip() {
        for name in ["help", "ls", "cd", "cat", "pwd", "echo", "clear"] {
            assert!(!matches!(Command::parse(name, &[]), Command::Unknown(_)));
        }
    }

    #[test]
    fn test_execute_line_blank() {
        let fs = VirtualFs::seed();
        assert_eq!(execute_line("   ", &fs, "/home/project"), CommandResult::empty());
    }
}
