use leptos::prelude::*;

use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/editor/editor.module.css");

#[component]
pub fn Editor() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let selected = Signal::derive(move || ctx.session.with(|s| s.selected().cloned()));
    let has_file = Signal::derive(move || ctx.session.with(|s| s.selected().is_some()));

    // Every keystroke writes through to the tree so `cat` sees the edit
    let handle_input = move |ev: leptos::ev::Event| {
        let content = event_target_value(&ev);
        ctx.session.update(|s| s.edit_selected(&content));
    };

    view! {
        <section class=css::editor>
            <Show
                when=move || has_file.get()
                fallback=|| view! {
                    <div class=css::placeholder>"Select a file to start editing"</div>
                }
            >
                <div class=css::tabBar>
                    <span class=css::fileName>
                        {move || selected.get().map(|f| f.name).unwrap_or_default()}
                    </span>
                    <span class=css::language>
                        {move || selected.get().map(|f| f.language().to_string()).unwrap_or_default()}
                    </span>
                </div>
                <textarea
                    class=css::textarea
                    spellcheck="false"
                    prop:value=move || selected.get().map(|f| f.content).unwrap_or_default()
                    on:input=handle_input
                ></textarea>
            </Show>
        </section>
    }
}
