use dioxus::prelude::*;

use common::markdown::render_markdown;

#[derive(Clone, PartialEq, Props)]
pub struct MarkdownProps {
    content: String,
}

// the html comes from our own content stores, so it goes in as-is
#[component]
pub fn Markdown(props: MarkdownProps) -> Element {
    let html = use_memo(use_reactive(&props.content, |content| render_markdown(&content)));

    rsx! {
        div { class: "markdown", dangerous_inner_html: "{html}" }
    }
}
