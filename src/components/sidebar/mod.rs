//! Project file tree with a name filter.

mod sidebar;

pub use sidebar::Sidebar;
