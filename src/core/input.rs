//! Line editor: key events in, edited line and history out.
//!
//! The buffer is the only copy of the line being typed. The terminal view
//! renders it but is never read back.

use crate::config::MAX_COMMAND_HISTORY;

// =============================================================================
// Key Events
// =============================================================================

/// Logical key carried by a key event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    ArrowUp,
    ArrowDown,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            "Backspace" => Self::Backspace,
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Modifier flags of a key event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(self) -> bool {
        self.alt || self.ctrl || self.meta
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// An unmodified key press.
    #[cfg(test)]
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }
}

// =============================================================================
// Command History
// =============================================================================

/// Submitted lines for up/down recall.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    entries: Vec<String>,
    index: Option<usize>,
}

impl CommandHistory {
    /// Record a submitted line and reset navigation.
    ///
    /// Blank lines and repeats of the previous entry are not recorded.
    pub fn push(&mut self, line: &str) {
        if !line.trim().is_empty() && self.entries.last().map(String::as_str) != Some(line) {
            self.entries.push(line.to_string());
            if self.entries.len() > MAX_COMMAND_HISTORY {
                self.entries.remove(0);
            }
        }
        self.index = None;
    }

    /// Step through history; negative goes back in time.
    ///
    /// Returns `None` when stepping forward past the newest entry.
    pub fn navigate(&mut self, direction: i32) -> Option<String> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        let next = match self.index {
            None if direction < 0 => Some(last),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < last => Some(i + 1),
            Some(_) if direction > 0 => None,
            current => current,
        };

        self.index = next;
        next.map(|i| self.entries[i].clone())
    }

    /// Whether an entry is currently recalled.
    pub fn is_browsing(&self) -> bool {
        self.index.is_some()
    }

    #[allow(dead_code)]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

// =============================================================================
// Line Buffer
// =============================================================================

/// What a key event did to the buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Edit {
    /// Character appended and echoed
    Echo(char),
    /// Last character removed
    Erased,
    /// Line replaced from history
    Recalled,
    /// Line taken for submission (already trimmed)
    Submit(String),
    /// Event dropped
    Ignored,
}

/// The line being typed plus its history.
#[derive(Clone, Debug, Default)]
pub struct LineBuffer {
    line: String,
    history: CommandHistory,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the line.
    pub fn text(&self) -> &str {
        &self.line
    }

    #[allow(dead_code)]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Apply one key event.
    ///
    /// Enter always submits, even with modifiers held. Any other key with a
    /// modifier is dropped.
    pub fn apply(&mut self, event: KeyEvent) -> Edit {
        if event.key == Key::Enter {
            let submitted = std::mem::take(&mut self.line).trim().to_string();
            self.history.push(&submitted);
            return Edit::Submit(submitted);
        }

        if event.modifiers.any() {
            return Edit::Ignored;
        }

        match event.key {
            Key::Char(c) => {
                self.line.push(c);
                Edit::Echo(c)
            }
            Key::Backspace => match self.line.pop() {
                Some(_) => Edit::Erased,
                None => Edit::Ignored,
            },
            Key::ArrowUp => {
                if let Some(entry) = self.history.navigate(-1) {
                    self.line = entry;
                    Edit::Recalled
                } else {
                    Edit::Ignored
                }
            }
            // Only steps forward while browsing, so a half-typed line survives
            Key::ArrowDown if self.history.is_browsing() => {
                self.line = self.history.navigate(1).unwrap_or_default();
                Edit::Recalled
            }
            Key::ArrowDown => Edit::Ignored,
            Key::Enter | Key::Other => Edit::Ignored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(buf: &mut LineBuffer, s: &str) {
        for c in s.chars() {
            buf.apply(KeyEvent::plain(Key::Char(c)));
        }
    }

    fn enter(buf: &mut LineBuffer) -> Edit {
        buf.apply(KeyEvent::plain(Key::Enter))
    }

    #[test]
    fn test_key_from_dom() {
        assert_eq!(Key::from_dom("Enter"), Key::Enter);
        assert_eq!(Key::from_dom("a"), Key::Char('a'));
        assert_eq!(Key::from_dom(" "), Key::Char(' '));
        assert_eq!(Key::from_dom("é"), Key::Char('é'));
        assert_eq!(Key::from_dom("Shift"), Key::Other);
        assert_eq!(Key::from_dom("F1"), Key::Other);
    }

    #[test]
    fn test_printable_keys_echo() {
        let mut buf = LineBuffer::new();
        assert_eq!(buf.apply(KeyEvent::plain(Key::Char('l'))), Edit::Echo('l'));
        type_str(&mut buf, "s");
        assert_eq!(buf.text(), "ls");
    }

    #[test]
    fn test_enter_submits_trimmed() {
        let mut buf = LineBuffer::new();
        type_str(&mut buf, "  cd src  ");
        assert_eq!(enter(&mut buf), Edit::Submit("cd src".to_string()));
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_modified_keys_dropped() {
        let mut buf = LineBuffer::new();
        for modifiers in [
            Modifiers { alt: true, ..Default::default() },
            Modifiers { ctrl: true, ..Default::default() },
            Modifiers { meta: true, ..Default::default() },
        ] {
            let edit = buf.apply(KeyEvent {
                key: Key::Char('c'),
                modifiers,
            });
            assert_eq!(edit, Edit::Ignored);
        }
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_backspace() {
        let mut buf = LineBuffer::new();
        assert_eq!(buf.apply(KeyEvent::plain(Key::Backspace)), Edit::Ignored);
        type_str(&mut buf, "lsx");
        assert_eq!(buf.apply(KeyEvent::plain(Key::Backspace)), Edit::Erased);
        assert_eq!(buf.text(), "ls");
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut buf = LineBuffer::new();
        assert_eq!(buf.apply(KeyEvent::plain(Key::Other)), Edit::Ignored);
    }

    #[test]
    fn test_history_recall() {
        let mut buf = LineBuffer::new();
        type_str(&mut buf, "ls");
        enter(&mut buf);
        type_str(&mut buf, "pwd");
        enter(&mut buf);

        assert_eq!(buf.apply(KeyEvent::plain(Key::ArrowUp)), Edit::Recalled);
        assert_eq!(buf.text(), "pwd");
        buf.apply(KeyEvent::plain(Key::ArrowUp));
        assert_eq!(buf.text(), "ls");
        // Stays on the oldest entry.
        buf.apply(KeyEvent::plain(Key::ArrowUp));
        assert_eq!(buf.text(), "ls");

        buf.apply(KeyEvent::plain(Key::ArrowDown));
        assert_eq!(buf.text(), "pwd");
        buf.apply(KeyEvent::plain(Key::ArrowDown));
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_arrow_down_keeps_typed_line() {
        let mut buf = LineBuffer::new();
        type_str(&mut buf, "ls");
        enter(&mut buf);

        type_str(&mut buf, "ca");
        assert_eq!(buf.apply(KeyEvent::plain(Key::ArrowDown)), Edit::Ignored);
        assert_eq!(buf.text(), "ca");

        buf.apply(KeyEvent::plain(Key::ArrowUp));
        assert_eq!(buf.text(), "ls");
        assert_eq!(buf.apply(KeyEvent::plain(Key::ArrowDown)), Edit::Recalled);
        assert_eq!(buf.text(), "");
        assert_eq!(buf.apply(KeyEvent::plain(Key::ArrowDown)), Edit::Ignored);
    }

    #[test]
    fn test_history_skips_blank_and_repeats() {
        let mut history = CommandHistory::default();
        history.push("ls");
        history.push("ls");
        history.push("");
        history.push("pwd");
        assert_eq!(history.entries(), ["ls", "pwd"]);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = CommandHistory::default();
        for i in 0..MAX_COMMAND_HISTORY + 5 {
            history.push(&format!("echo {}", i));
        }
        assert_eq!(history.entries().len(), MAX_COMMAND_HISTORY);
        assert_eq!(history.entries()[0], "echo 5");
    }

    #[test]
    fn test_history_empty_navigation() {
        let mut buf = LineBuffer::new();
        assert_eq!(buf.apply(KeyEvent::plain(Key::ArrowUp)), Edit::Ignored);
        assert!(buf.history().entries().is_empty());
    }
}
