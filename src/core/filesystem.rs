use std::collections::HashSet;
use std::sync::Arc;

use crate::config::{SEED_MANIFEST, WORKSPACE_ROOT};
use crate::core::error::SeedError;
use crate::models::{ManifestItem, ManifestKind, Node};
use crate::utils::console;

/// In-memory virtual filesystem.
///
/// The tree is a forest of root-level nodes under a synthetic root that is
/// not itself a [`Node`]. Values are never mutated in place: an edit builds a
/// new `VirtualFs` that shares every untouched subtree with the old one, so a
/// clone held elsewhere never observes a half-applied change.
///
/// # Path Convention
///
/// - Tree paths are slash-separated, `/` is the synthetic root
/// - Empty segments are ignored (`//src/` is the same as `/src`)
/// - Session paths live under [`WORKSPACE_ROOT`] and map onto tree paths
///   through [`VirtualFs::tree_path`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VirtualFs {
    root: Vec<Arc<Node>>,
}

impl VirtualFs {
    /// The seeded project tree shipped with the application.
    ///
    /// Falls back to an empty tree if the embedded manifest is rejected.
    pub fn seed() -> Self {
        match Self::from_json(SEED_MANIFEST) {
            Ok(fs) => fs,
            Err(e) => {
                console::warn(&format!("Seed manifest rejected: {}", e));
                Self::empty()
            }
        }
    }

    /// Create an empty filesystem.
    pub fn empty() -> Self {
        Self { root: Vec::new() }
    }

    /// Parse and validate a JSON seed manifest.
    pub fn from_json(text: &str) -> Result<Self, SeedError> {
        let items: Vec<ManifestItem> = serde_json::from_str(text)?;
        Self::from_manifest(&items)
    }

    /// Build a filesystem from manifest items.
    ///
    /// Rejects empty names, duplicate sibling names, files with children and
    /// folders with content.
    pub fn from_manifest(items: &[ManifestItem]) -> Result<Self, SeedError> {
        Ok(Self {
            root: build_children(items, "/")?,
        })
    }

    /// Root-level entries in store order.
    #[allow(dead_code)]
    pub fn root(&self) -> &[Arc<Node>] {
        &self.root
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Return a new tree where every file named `file_name` has `new_content`.
    ///
    /// Matching is by name alone, so same-named files in different folders
    /// are all updated. Folders on the path to a replaced file are rebuilt;
    /// everything else is shared with `self`.
    pub fn replace_file_content(&self, file_name: &str, new_content: &str) -> Self {
        match replace_in(&self.root, file_name, new_content) {
            Some(root) => Self { root },
            None => self.clone(),
        }
    }

    // =========================================================================
    // Resolution
    // =========================================================================

    /// Resolve a tree path to the children of the folder it names.
    ///
    /// `/` resolves to the root entries. Every segment must name a folder.
    pub fn resolve_folder(&self, path: &str) -> Option<&[Arc<Node>]> {
        let mut current: &[Arc<Node>] = &self.root;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            current = current
                .iter()
                .find(|node| node.is_folder() && node.name() == segment)?
                .children()?;
        }
        Some(current)
    }

    /// Resolve a tree path to a file or folder node.
    ///
    /// The final segment is looked up among the children of the folder named
    /// by the rest of the path. The root itself is not a node.
    pub fn resolve_node(&self, path: &str) -> Option<&Arc<Node>> {
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let name = segments.pop()?;
        let parent = segments.join("/");
        self.resolve_folder(&parent)?
            .iter()
            .find(|node| node.name() == name)
    }

    /// Map a session path under [`WORKSPACE_ROOT`] to a tree path.
    ///
    /// Returns `None` for paths outside the workspace root.
    pub fn tree_path(session_path: &str) -> Option<String> {
        let mut segments = session_path.split('/').filter(|s| !s.is_empty());
        for root_segment in WORKSPACE_ROOT.split('/').filter(|s| !s.is_empty()) {
            if segments.next()? != root_segment {
                return None;
            }
        }
        Some(format!("/{}", segments.collect::<Vec<_>>().join("/")))
    }

    /// Folder listing for a session path.
    pub fn folder_at(&self, session_path: &str) -> Option<&[Arc<Node>]> {
        self.resolve_folder(&Self::tree_path(session_path)?)
    }

    /// Node lookup for a session path.
    pub fn node_at(&self, session_path: &str) -> Option<&Arc<Node>> {
        self.resolve_node(&Self::tree_path(session_path)?)
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Case-insensitive name filter for the tree view.
    ///
    /// A folder is kept when its own name matches or any descendant does; a
    /// kept folder carries only its matching children. An empty term returns
    /// the whole tree.
    pub fn filter(&self, term: &str) -> Vec<Arc<Node>> {
        if term.is_empty() {
            return self.root.clone();
        }
        filter_nodes(&self.root, &term.to_lowercase())
    }
}

fn build_children(items: &[ManifestItem], parent: &str) -> Result<Vec<Arc<Node>>, SeedError> {
    let mut seen = HashSet::new();
    let mut children = Vec::with_capacity(items.len());

    for item in items {
        if item.name.is_empty() {
            return Err(SeedError::EmptyName {
                parent: parent.to_string(),
            });
        }
        if !seen.insert(item.name.as_str()) {
            return Err(SeedError::DuplicateName {
                parent: parent.to_string(),
                name: item.name.clone(),
            });
        }

        let node = match item.kind {
            ManifestKind::File => {
                if item.children.is_some() {
                    return Err(SeedError::FileWithChildren(item.name.clone()));
                }
                Node::file(&item.name, item.content.clone().unwrap_or_default())
            }
            ManifestKind::Folder => {
                if item.content.is_some() {
                    return Err(SeedError::FolderWithContent(item.name.clone()));
                }
                let path = format!("{}{}/", parent, item.name);
                Node::Folder {
                    name: item.name.clone(),
                    children: build_children(item.children.as_deref().unwrap_or_default(), &path)?,
                }
            }
        };
        children.push(Arc::new(node));
    }

    Ok(children)
}

/// Rebuild `children` with replaced files, or `None` if nothing matched.
fn replace_in(
    children: &[Arc<Node>],
    file_name: &str,
    new_content: &str,
) -> Option<Vec<Arc<Node>>> {
    let mut changed = false;
    let next = children
        .iter()
        .map(|child| match replace_node(child, file_name, new_content) {
            Some(replaced) => {
                changed = true;
                replaced
            }
            None => Arc::clone(child),
        })
        .collect();
    changed.then_some(next)
}

fn replace_node(node: &Arc<Node>, file_name: &str, new_content: &str) -> Option<Arc<Node>> {
    match node.as_ref() {
        Node::File { name, .. } if name == file_name => {
            Some(Arc::new(Node::file(name.clone(), new_content)))
        }
        Node::File { .. } => None,
        Node::Folder { name, children } => {
            replace_in(children, file_name, new_content).map(|children| {
                Arc::new(Node::Folder {
                    name: name.clone(),
                    children,
                })
            })
        }
    }
}

fn filter_nodes(items: &[Arc<Node>], term: &str) -> Vec<Arc<Node>> {
    items
        .iter()
        .filter_map(|item| {
            let name_matches = item.name().to_lowercase().contains(term);
            match item.as_ref() {
                Node::Folder { name, children } => {
                    let kept = filter_nodes(children, term);
                    (name_matches || !kept.is_empty()).then(|| {
                        Arc::new(Node::Folder {
                            name: name.clone(),
                            children: kept,
                        })
                    })
                }
                Node::File { .. } => name_matches.then(|| Arc::clone(item)),
            }
        })
        .collect()
}
