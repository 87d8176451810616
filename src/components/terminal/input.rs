//! Terminal prompt line.
//!
//! The element is a focusable display of the session's line buffer. Key
//! presses are translated to [`KeyEvent`]s and handed to `on_key`; the text
//! shown always comes back from the buffer.

use leptos::{ev, prelude::*};

use crate::core::input::{Key, KeyEvent, Modifiers};

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Translate a DOM keyboard event.
fn key_event(ev: &ev::KeyboardEvent) -> KeyEvent {
    KeyEvent {
        key: Key::from_dom(&ev.key()),
        modifiers: Modifiers {
            alt: ev.alt_key(),
            ctrl: ev.ctrl_key(),
            meta: ev.meta_key(),
        },
    }
}

#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] line: Signal<String>,
    on_key: Callback<KeyEvent, bool>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Div>::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if on_key.run(key_event(&ev)) {
            ev.prevent_default();
        }
    };

    view! {
        <div
            node_ref=input_ref
            class=css::line
            tabindex="0"
            data-terminal-input=""
            on:keydown=handle_keydown
        >
            <span class=css::prompt>{prompt}</span>
            <span class=css::text>{line}</span>
            <span class=css::cursor></span>
        </div>
    }
}
