//! Shell session: the explicit context every interpreter call runs in.
//!
//! A [`Session`] owns the filesystem, the working directory, the file open in
//! the editor and the line being typed. Several sessions can coexist; nothing
//! here is global.

use std::sync::Arc;

use crate::config::{PROMPT_SUFFIX, WORKSPACE_ROOT};
use crate::core::VirtualFs;
use crate::core::commands::{CommandResult, Effect, execute_line};
use crate::core::input::{Edit, KeyEvent, LineBuffer};
use crate::models::{Language, Node};

/// Snapshot of the file open in the editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub content: String,
}

impl SelectedFile {
    pub fn language(&self) -> Language {
        Language::from_name(&self.name)
    }
}

/// Outcome of one key event.
#[derive(Clone, Debug, PartialEq)]
pub enum KeyOutcome {
    /// The line buffer changed; re-render the input
    Edited,
    /// A line was submitted and executed
    Submitted {
        /// Prompt the line was typed at
        prompt: String,
        /// Submitted text, trimmed
        input: String,
        result: CommandResult,
    },
    /// Nothing happened
    Ignored,
}

#[derive(Clone, Debug)]
pub struct Session {
    fs: VirtualFs,
    current_path: String,
    selected: Option<SelectedFile>,
    input: LineBuffer,
}

impl Session {
    /// A session over the seeded project tree.
    pub fn new() -> Self {
        Self::with_fs(VirtualFs::seed())
    }

    /// A session over a given tree, starting at the workspace root.
    pub fn with_fs(fs: VirtualFs) -> Self {
        Self {
            fs,
            current_path: WORKSPACE_ROOT.to_string(),
            selected: None,
            input: LineBuffer::new(),
        }
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    #[allow(dead_code)]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    pub fn selected(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn input(&self) -> &LineBuffer {
        &self.input
    }

    /// Prompt shown before the next line of input.
    pub fn prompt(&self) -> String {
        format!("{}{}", self.current_path, PROMPT_SUFFIX)
    }

    /// Execute one line and apply any directory change.
    ///
    /// `ClearScreen` is left in the result for the terminal to apply.
    pub fn execute(&mut self, line: &str) -> CommandResult {
        let result = execute_line(line, &self.fs, &self.current_path);
        if let Some(Effect::ChangeDirectory(path)) = &result.effect {
            self.current_path = path.clone();
        }
        result
    }

    /// Feed one key event through the line buffer.
    pub fn handle_key(&mut self, event: KeyEvent) -> KeyOutcome {
        match self.input.apply(event) {
            Edit::Submit(input) => {
                let prompt = self.prompt();
                let result = self.execute(&input);
                KeyOutcome::Submitted {
                    prompt,
                    input,
                    result,
                }
            }
            Edit::Echo(_) | Edit::Erased | Edit::Recalled => KeyOutcome::Edited,
            Edit::Ignored => KeyOutcome::Ignored,
        }
    }

    /// Open a file in the editor. Folders are ignored.
    pub fn select_file(&mut self, node: &Arc<Node>) {
        if let Node::File { name, content } = node.as_ref() {
            self.selected = Some(SelectedFile {
                name: name.clone(),
                content: content.clone(),
            });
        }
    }

    /// Open the file at a tree path, resolved against the current tree.
    ///
    /// Folders and missing paths are ignored.
    pub fn select_path(&mut self, tree_path: &str) {
        if let Some(node) = self.fs.resolve_node(tree_path).cloned() {
            self.select_file(&node);
        }
    }

    /// Replace the open file's content in both the editor and the tree.
    ///
    /// Does nothing when no file is open.
    pub fn edit_selected(&mut self, new_content: &str) {
        let Some(selected) = self.selected.as_mut() else {
            return;
        };
        self.fs = self.fs.replace_file_content(&selected.name, new_content);
        selected.content = new_content.to_string();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
