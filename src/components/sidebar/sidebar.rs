//! Sidebar component.
//!
//! Renders the session's tree, filtered by the search box. Folder open state
//! is keyed by tree path and kept outside the items, so rebuilding the tree
//! after an edit does not collapse anything.

use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::TREE_INDENT_PX;
use crate::models::Node;

stylance::import_crate_style!(css, "src/components/sidebar/sidebar.module.css");

#[component]
pub fn Sidebar(
    /// Called with the tree path of a clicked file
    on_select: Callback<String>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let (term, set_term) = signal(String::new());
    let open = RwSignal::new(HashSet::<String>::new());

    let tree = Memo::new(move |_| ctx.session.with(|s| s.fs().filter(&term.get())));

    view! {
        <aside class=css::sidebar>
            <div class=css::search>
                <span class=css::searchIcon>
                    <Icon icon=ic::SEARCH />
                </span>
                <input
                    type="text"
                    class=css::searchInput
                    placeholder="Search files..."
                    prop:value=term
                    on:input=move |ev| set_term.set(event_target_value(&ev))
                />
            </div>
            <div class=css::tree role="tree">
                {move || {
                    tree.get()
                        .into_iter()
                        .map(|node| tree_item(node, "", 0, open, on_select))
                        .collect_view()
                }}
            </div>
        </aside>
    }
}

/// One row of the tree, plus its children when it is an open folder.
fn tree_item(
    node: Arc<Node>,
    parent: &str,
    depth: usize,
    open: RwSignal<HashSet<String>>,
    on_select: Callback<String>,
) -> AnyView {
    let path = format!("{}/{}", parent, node.name());
    let indent = format!("{}px", depth * TREE_INDENT_PX);
    let name = node.name().to_string();

    let Some(children) = node.children() else {
        return view! {
            <div style:margin-left=indent>
                <div
                    class=css::row
                    role="treeitem"
                    on:click=move |_| on_select.run(path.clone())
                >
                    <span class=css::chevron></span>
                    <span class=css::fileIcon>
                        <Icon icon=ic::FILE />
                    </span>
                    <span class=css::name>{name}</span>
                </div>
            </div>
        }
        .into_any();
    };

    let children = children.to_vec();
    let is_open = {
        let path = path.clone();
        Signal::derive(move || open.with(|o| o.contains(&path)))
    };
    let toggle = {
        let path = path.clone();
        move |_| {
            open.update(|o| {
                if !o.remove(&path) {
                    o.insert(path.clone());
                }
            })
        }
    };

    view! {
        <div style:margin-left=indent>
            <div class=css::row role="treeitem" aria-expanded=move || is_open.get().to_string() on:click=toggle>
                <span class=css::chevron>
                    {move || {
                        if is_open.get() {
                            view! { <Icon icon=ic::CHEVRON_DOWN /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::CHEVRON_RIGHT /> }.into_any()
                        }
                    }}
                </span>
                <span class=css::folderIcon>
                    <Icon icon=ic::FOLDER />
                </span>
                <span class=format!("{} {}", css::name, css::nameDir)>{name}</span>
            </div>
            {move || {
                is_open.get().then(|| {
                    children
                        .iter()
                        .map(|child| tree_item(Arc::clone(child), &path, depth + 1, open, on_select))
                        .collect_view()
                })
            }}
        </div>
    }
    .into_any()
}
