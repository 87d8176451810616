//! Root application module.
//!
//! Contains the main App component, AppContext definition, TerminalState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;

use crate::components::Workspace;
use crate::config::{MAX_TERMINAL_HISTORY, WELCOME_LINES};
use crate::core::{CommandResult, Effect, Session};
use crate::models::{ChatMessage, OutputLine, Scrollback};

// ============================================================================
// TerminalState
// ============================================================================

/// Terminal scrollback managed with Leptos signals.
///
/// This is the write side of the terminal: lines are appended, or the whole
/// screen is erased. The line being typed lives in the [`Session`].
#[derive(Clone, Copy)]
pub struct TerminalState {
    /// Terminal output history (bounded by `MAX_TERMINAL_HISTORY`).
    pub history: RwSignal<Scrollback>,
}

impl TerminalState {
    /// Creates terminal state holding the welcome banner.
    pub fn new() -> Self {
        let mut history = Scrollback::new(MAX_TERMINAL_HISTORY);
        history.extend(WELCOME_LINES.iter().map(|line| OutputLine::info(*line)));
        Self {
            history: RwSignal::new(history),
        }
    }

    /// Appends a single output line to the terminal history.
    pub fn push_output(&self, line: OutputLine) {
        self.history.update(|h| h.push(line));
    }

    /// Appends multiple output lines to the terminal history.
    pub fn push_lines(&self, lines: Vec<OutputLine>) {
        self.history.update(|h| h.extend(lines));
    }

    /// Clears all terminal output history.
    pub fn clear_history(&self) {
        self.history.update(|h| h.clear());
    }

    /// Render one submitted command: the echoed input line, then either a
    /// screen clear or the command's output.
    pub fn record(&self, prompt: String, input: String, result: CommandResult) {
        if result.effect == Some(Effect::ClearScreen) {
            self.clear_history();
            return;
        }
        self.push_output(OutputLine::command(prompt, input));
        self.push_lines(result.output);
    }
}

impl Default for TerminalState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// PanelState
// ============================================================================

/// Visibility of the collapsible panels.
#[derive(Clone, Copy)]
pub struct PanelState {
    pub sidebar: RwSignal<bool>,
    pub terminal: RwSignal<bool>,
    pub chat: RwSignal<bool>,
}

impl PanelState {
    pub fn new() -> Self {
        Self {
            sidebar: RwSignal::new(true),
            terminal: RwSignal::new(true),
            chat: RwSignal::new(false),
        }
    }
}

impl Default for PanelState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Session**: filesystem, working directory, open file, input line
/// - **Terminal**: output scrollback
/// - **Panels**: which panels are visible
/// - **Chat**: assistant conversation, kept here so replies that arrive
///   after the panel closes are not lost
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<Session>,
    pub terminal: TerminalState,
    pub panels: PanelState,
    pub chat: RwSignal<Vec<ChatMessage>>,
}

impl AppContext {
    /// Creates a new application context over the seeded project tree.
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(Session::new()),
            terminal: TerminalState::new(),
            panels: PanelState::new(),
            chat: RwSignal::new(Vec::new()),
        }
    }

    /// Prompt for the next line of terminal input.
    pub fn prompt(&self) -> String {
        self.session.with(|s| s.prompt())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    font-family: Menlo, Monaco, 'Courier New', monospace;
                ">
                    <h1 style="color: #ff6b6b;">"Something went wrong"</h1>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Workspace />
        </ErrorBoundary>
    }
}
