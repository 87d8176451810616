//! Terminal-related data types for output rendering.

use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::NodeKind;

/// Represents a single line of output in the terminal with a unique ID
#[derive(Clone, Debug)]
pub struct OutputLine {
    /// Unique ID for efficient keying in For loops
    pub id: usize,
    /// The actual output data
    pub data: OutputLineData,
}

/// The actual content of an output line
#[derive(Clone, Debug, PartialEq)]
pub enum OutputLineData {
    /// Echoed command with the prompt it was typed at
    Command { prompt: String, input: String },
    /// Plain text output, may span several lines (`cat`)
    Text(String),
    /// Error message (red)
    Error(String),
    /// Informational banner text (yellow)
    Info(String),
    /// Directory listing entry (`ls`)
    ListEntry { name: String, kind: NodeKind },
}

/// Plain-text rendering, as the line would appear in a text terminal.
impl fmt::Display for OutputLineData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command { prompt, input } => write!(f, "{}{}", prompt, input),
            Self::Text(s) | Self::Error(s) | Self::Info(s) => f.write_str(s),
            Self::ListEntry { name, kind } => write!(f, "{} {}", kind.tag(), name),
        }
    }
}

// Global counter for generating unique IDs
static OUTPUT_LINE_COUNTER: AtomicUsize = AtomicUsize::new(0);

impl OutputLine {
    /// Create a new OutputLine with a unique ID
    fn new(data: OutputLineData) -> Self {
        Self {
            id: OUTPUT_LINE_COUNTER.fetch_add(1, Ordering::Relaxed),
            data,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Text(s.into()))
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Error(s.into()))
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::new(OutputLineData::Info(s.into()))
    }

    pub fn command(prompt: impl Into<String>, input: impl Into<String>) -> Self {
        Self::new(OutputLineData::Command {
            prompt: prompt.into(),
            input: input.into(),
        })
    }

    pub fn list_entry(name: impl Into<String>, kind: NodeKind) -> Self {
        Self::new(OutputLineData::ListEntry {
            name: name.into(),
            kind,
        })
    }
}

impl PartialEq for OutputLine {
    fn eq(&self, other: &Self) -> bool {
        // Only compare data, not ID
        self.data == other.data
    }
}

// =============================================================================
// Scrollback
// =============================================================================

/// Bounded terminal scrollback; the oldest lines are dropped first.
#[derive(Clone, Debug)]
pub struct Scrollback {
    lines: VecDeque<OutputLine>,
    capacity: usize,
}

impl Scrollback {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, line: OutputLine) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = OutputLine>) {
        for line in lines {
            self.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &OutputLine> {
        self.lines.iter()
    }

    /// Snapshot for keyed rendering.
    pub fn to_vec(&self) -> Vec<OutputLine> {
        self.lines.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_constructors() {
        assert_eq!(
            OutputLine::text("hello").data,
            OutputLineData::Text("hello".to_string())
        );
        assert_eq!(
            OutputLine::error("error").data,
            OutputLineData::Error("error".to_string())
        );
        assert_eq!(
            OutputLine::info("info").data,
            OutputLineData::Info("info".to_string())
        );
    }

    #[test]
    fn test_plain_rendering() {
        assert_eq!(OutputLine::list_entry("src", NodeKind::Folder).data.to_string(), "d src");
        assert_eq!(
            OutputLine::list_entry("package.json", NodeKind::File).data.to_string(),
            "- package.json"
        );
        assert_eq!(
            OutputLine::command("/home/project $ ", "ls").data.to_string(),
            "/home/project $ ls"
        );
    }

    #[test]
    fn test_unique_ids() {
        let line1 = OutputLine::text("first");
        let line2 = OutputLine::text("second");
        let line3 = OutputLine::text("first");

        assert_ne!(line1.id, line2.id);
        assert_ne!(line1.id, line3.id);
        assert_eq!(line1, line3);
    }

    #[test]
    fn test_scrollback_drops_oldest() {
        let mut sb = Scrollback::new(2);
        sb.push(OutputLine::text("a"));
        sb.push(OutputLine::text("b"));
        sb.push(OutputLine::text("c"));

        let texts: Vec<String> = sb.iter().map(|l| l.data.to_string()).collect();
        assert_eq!(texts, vec!["b", "c"]);
        assert_eq!(sb.len(), 2);

        sb.clear();
        assert!(sb.is_empty());
    }

    #[test]
    fn test_scrollback_extend() {
        let mut sb = Scrollback::new(10);
        sb.extend(vec![OutputLine::text("x"), OutputLine::text("")]);
        assert_eq!(sb.to_vec().len(), 2);
    }
}
