//! Chat panel component.
//!
//! Messages live in [`AppContext`], so a reply that lands after the panel
//! was closed is still there when it reopens.

use gloo_timers::future::TimeoutFuture;
use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::CHAT_RESPONSE_DELAY_MS;
use crate::core::assistant;
use crate::models::ChatMessage;

stylance::import_crate_style!(css, "src/components/chat/chat.module.css");

/// Post a user message and schedule the assistant's reply.
fn send(ctx: AppContext, text: String) {
    let reply = assistant::reply(&text);
    ctx.chat.update(|messages| messages.push(ChatMessage::user(text)));

    spawn_local(async move {
        TimeoutFuture::new(CHAT_RESPONSE_DELAY_MS).await;
        ctx.chat
            .update(|messages| messages.push(ChatMessage::assistant(reply)));
    });
}

#[component]
pub fn Chat() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let messages_ref = NodeRef::<leptos::html::Div>::new();
    let (draft, set_draft) = signal(String::new());

    // Keep the newest message in view
    Effect::new(move || {
        ctx.chat.track();
        if let Some(el) = messages_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        set_draft.set(String::new());
        send(ctx, text);
    };

    view! {
        <aside class=css::chat>
            <div class=css::header>
                <span class=css::title>"AI Assistant"</span>
                <button
                    class=css::close
                    title="Close chat"
                    on:click=move |_| ctx.panels.chat.set(false)
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </div>
            <div node_ref=messages_ref class=css::messages>
                {move || {
                    ctx.chat
                        .get()
                        .into_iter()
                        .map(|message| {
                            let class = if message.is_user() {
                                format!("{} {}", css::message, css::fromUser)
                            } else {
                                format!("{} {}", css::message, css::fromAssistant)
                            };
                            view! { <div class=class>{message.text}</div> }
                        })
                        .collect_view()
                }}
            </div>
            <form class=css::form on:submit=handle_submit>
                <input
                    type="text"
                    class=css::input
                    placeholder="Ask a question..."
                    prop:value=draft
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" class=css::send>"Send"</button>
            </form>
        </aside>
    }
}
