use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

// =============================================================================
// Node
// =============================================================================

/// Kind of a filesystem entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

impl NodeKind {
    /// Single-character tag used by `ls` (`d` for folders, `-` for files).
    pub fn tag(self) -> char {
        match self {
            Self::Folder => 'd',
            Self::File => '-',
        }
    }
}

/// An entry in the virtual filesystem.
///
/// Children are held behind [`Arc`] so that a new tree version can reuse
/// every subtree an edit did not touch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    File {
        name: String,
        content: String,
    },
    Folder {
        name: String,
        children: Vec<Arc<Node>>,
    },
}

impl Node {
    /// Create a file node.
    pub fn file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::File {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create a folder node from owned children.
    #[cfg(test)]
    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::Folder {
            name: name.into(),
            children: children.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::File { name, .. } | Self::Folder { name, .. } => name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::File { .. } => NodeKind::File,
            Self::Folder { .. } => NodeKind::Folder,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// File content (files only).
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::File { content, .. } => Some(content),
            Self::Folder { .. } => None,
        }
    }

    /// Child entries (folders only).
    pub fn children(&self) -> Option<&[Arc<Node>]> {
        match self {
            Self::Folder { children, .. } => Some(children),
            Self::File { .. } => None,
        }
    }
}

// =============================================================================
// Seed Manifest
// =============================================================================

/// Entry type as written in the seed manifest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestKind {
    File,
    Folder,
}

/// One item of the seed manifest (`assets/seed.json`).
///
/// The manifest shape is loose on purpose: `content` and `children` are both
/// optional, and [`crate::core::VirtualFs::from_manifest`] rejects items that
/// carry the wrong one for their kind.
#[derive(Clone, Debug, Deserialize)]
pub struct ManifestItem {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ManifestKind,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub children: Option<Vec<ManifestItem>>,
}

// =============================================================================
// Language Hint
// =============================================================================

/// Syntax language hint handed to the editor surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    TypeScript,
    Html,
    Css,
    Json,
    PlainText,
}

impl Language {
    /// Detect the language from a file name's extension.
    pub fn from_name(name: &str) -> Self {
        let ext = name.rsplit_once('.').map(|(_, ext)| ext.to_lowercase());
        match ext.as_deref() {
            Some("js") => Self::JavaScript,
            Some("ts" | "tsx") => Self::TypeScript,
            Some("html") => Self::Html,
            Some("css") => Self::Css,
            Some("json") => Self::Json,
            _ => Self::PlainText,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::PlainText => "plaintext",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
