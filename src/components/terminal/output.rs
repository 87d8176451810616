use crate::models::{NodeKind, OutputLine, OutputLineData};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

#[component]
pub fn Output(line: OutputLine) -> impl IntoView {
    match line.data {
        OutputLineData::Command { prompt, input } => {
            view! {
                <div class=css::command>
                    <span class=css::textGreen>{prompt}</span>
                    <span class=css::textFg>{input}</span>
                </div>
            }.into_any()
        }
        OutputLineData::Text(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textFg)>{text}</div>
            }.into_any()
        }
        OutputLineData::ListEntry { name, kind } => {
            let name_class = match kind {
                NodeKind::Folder => format!("{} {}", css::textCyan, css::fontBold),
                NodeKind::File => css::textFg.to_string(),
            };
            view! {
                <div class=css::listEntry>
                    <span class=css::textDim>{kind.tag().to_string()}</span>
                    " "
                    <span class=name_class>{name}</span>
                </div>
            }.into_any()
        }
        OutputLineData::Error(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textRed)>{text}</div>
            }.into_any()
        }
        OutputLineData::Info(text) => {
            view! {
                <div class=format!("{} {}", css::line, css::textYellow)>{text}</div>
            }.into_any()
        }
    }
}
