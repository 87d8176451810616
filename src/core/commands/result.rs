//! Command execution result type.

use crate::models::OutputLine;

/// State change requested by a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// New working directory (absolute session path)
    ChangeDirectory(String),
    /// Erase all prior terminal output
    ClearScreen,
}

/// Result of executing a command.
///
/// Commands produce output lines and optionally one [`Effect`] for the
/// session or the terminal to apply.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Optional state change
    pub effect: Option<Effect>,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            effect: None,
        }
    }

    /// Create a result that moves the working directory.
    pub fn change_directory(path: impl Into<String>) -> Self {
        Self {
            output: vec![],
            effect: Some(Effect::ChangeDirectory(path.into())),
        }
    }

    /// Create a result that clears the screen.
    pub fn clear() -> Self {
        Self {
            output: vec![],
            effect: Some(Effect::ClearScreen),
        }
    }

    /// Create an empty result (no output, no effect).
    pub fn empty() -> Self {
        Self {
            output: vec![],
            effect: None,
        }
    }

    /// Output rendered as plain text lines.
    #[cfg(test)]
    pub fn plain_lines(&self) -> Vec<String> {
        self.output.iter().map(|l| l.data.to_string()).collect()
    }
}
