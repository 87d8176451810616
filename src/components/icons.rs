//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuChevronDown as ChevronDown, LuChevronRight as ChevronRight, LuFile as File,
        LuFolderOpen as Folder, LuMessageSquare as Chat, LuPanelLeft as Sidebar,
        LuSearch as Search, LuTerminal as Terminal, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsChatSquare as Chat, BsChevronDown as ChevronDown, BsChevronRight as ChevronRight,
        BsFileEarmark as File, BsFolder2Open as Folder, BsLayoutSidebar as Sidebar,
        BsSearch as Search, BsTerminal as Terminal, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(FOLDER, Folder);
themed_icon!(FILE, File);
themed_icon!(SIDEBAR, Sidebar);
themed_icon!(TERMINAL, Terminal);
themed_icon!(CHAT, Chat);
themed_icon!(SEARCH, Search);
themed_icon!(CLOSE, Close);
