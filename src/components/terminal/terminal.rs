//! Terminal view component.
//!
//! Scrollback output followed by the prompt line.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::terminal::{Input, Output};
use crate::core::{KeyOutcome, input::KeyEvent};
use crate::models::Scrollback;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

// ============================================================================
// Helper Functions
// ============================================================================

/// Focus the terminal input element.
fn focus_input() {
    use wasm_bindgen::JsCast;
    if let Some(window) = web_sys::window()
        && let Some(document) = window.document()
        && let Some(input) = document.query_selector("[data-terminal-input]").ok().flatten()
        && let Ok(element) = input.dyn_into::<web_sys::HtmlElement>()
    {
        let _ = element.focus();
    }
}

/// Auto-scroll output to bottom when history changes.
fn setup_autoscroll_effect(history: RwSignal<Scrollback>, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        history.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    let prompt = Signal::derive(move || ctx.prompt());
    let line = Signal::derive(move || ctx.session.with(|s| s.input().text().to_string()));
    let on_key = create_key_callback(ctx);

    setup_autoscroll_effect(ctx.terminal.history, output_ref);

    let history_signal = ctx.terminal.history;

    view! {
        <div class=css::container on:click=move |_| focus_input()>
            <div node_ref=output_ref class=css::output>
                <For
                    each=move || history_signal.get().to_vec()
                    key=|line| line.id
                    children=|line| view! { <Output line=line /> }
                />
                <Input prompt=prompt line=line on_key=on_key />
            </div>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

/// Route key events through the session; returns whether the event was used.
fn create_key_callback(ctx: AppContext) -> Callback<KeyEvent, bool> {
    Callback::new(move |event: KeyEvent| {
        let outcome = ctx
            .session
            .try_update(|s| s.handle_key(event))
            .unwrap_or(KeyOutcome::Ignored);

        match outcome {
            KeyOutcome::Submitted {
                prompt,
                input,
                result,
            } => {
                ctx.terminal.record(prompt, input, result);
                true
            }
            KeyOutcome::Edited => true,
            KeyOutcome::Ignored => false,
        }
    })
}
