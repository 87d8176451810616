//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Help text for `help` command.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

/// Seed project tree, loaded into the virtual filesystem at session start.
pub const SEED_MANIFEST: &str = include_str!("../assets/seed.json");

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "ZAI-IDE";

/// Lines printed when the terminal opens.
pub const WELCOME_LINES: &[&str] = &[
    "Welcome to ZAI-IDE Terminal",
    "Type \"help\" for available commands",
];

// =============================================================================
// Filesystem Configuration
// =============================================================================

/// Session path that maps onto the root of the virtual filesystem.
///
/// The shell never navigates above this directory.
pub const WORKSPACE_ROOT: &str = "/home/project";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of terminal output lines to keep in history.
pub const MAX_TERMINAL_HISTORY: usize = 1000;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Separator between the working directory and the input.
pub const PROMPT_SUFFIX: &str = " $ ";

// =============================================================================
// Editor Configuration
// =============================================================================

/// Indentation per depth level in the sidebar tree, in pixels.
pub const TREE_INDENT_PX: usize = 10;

// =============================================================================
// Assistant Configuration
// =============================================================================

/// Simulated assistant response latency in milliseconds.
pub const CHAT_RESPONSE_DELAY_MS: u32 = 1000;

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Lucide` - Minimal, thin strokes (default)
/// - `Bootstrap` - Familiar, slightly bolder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Lucide,
    Bootstrap,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
