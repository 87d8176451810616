//! Workspace layout: header, sidebar, editor, terminal and chat.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::chat::Chat;
use crate::components::editor::Editor;
use crate::components::icons as ic;
use crate::components::sidebar::Sidebar;
use crate::components::terminal::Terminal;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/workspace/workspace.module.css");

/// Header button that flips one panel's visibility.
#[component]
fn PanelToggle(visible: RwSignal<bool>, icon: IconData, title: &'static str) -> impl IntoView {
    let class = move || {
        if visible.get() {
            format!("{} {}", css::toggle, css::toggleActive)
        } else {
            css::toggle.to_string()
        }
    };

    view! {
        <button
            class=class
            title=title
            aria-pressed=move || visible.get().to_string()
            on:click=move |_| visible.update(|v| *v = !*v)
        >
            <Icon icon=icon />
        </button>
    }
}

#[component]
pub fn Workspace() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let panels = ctx.panels;

    let on_select = Callback::new(move |path: String| {
        ctx.session.update(|s| s.select_path(&path));
    });

    view! {
        <div class=css::workspace>
            <header class=css::header>
                <span class=css::title>{APP_NAME}</span>
                <div class=css::toggles>
                    <PanelToggle visible=panels.sidebar icon=ic::SIDEBAR title="Toggle sidebar" />
                    <PanelToggle visible=panels.terminal icon=ic::TERMINAL title="Toggle terminal" />
                    <PanelToggle visible=panels.chat icon=ic::CHAT title="Toggle chat" />
                </div>
            </header>
            <div class=css::body>
                <Show when=move || panels.sidebar.get()>
                    <Sidebar on_select=on_select />
                </Show>
                <main class=css::main>
                    <Editor />
                    <Show when=move || panels.terminal.get()>
                        <div class=css::terminalPane>
                            <Terminal />
                        </div>
                    </Show>
                </main>
                <Show when=move || panels.chat.get()>
                    <Chat />
                </Show>
            </div>
        </div>
    }
}
