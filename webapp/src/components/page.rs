use dioxus::prelude::*;

use crate::app::content::use_site_config;

#[derive(Clone, PartialEq, Props)]
pub struct PageProps {
    // shown in the tab as "<title> | <owner>", or just the owner when empty
    title: String,
    #[props(default)]
    heading: Option<String>,
    #[props(default)]
    description: Option<String>,
    children: Element,
}

#[component]
pub fn Page(props: PageProps) -> Element {
    let PageProps {
        title,
        heading,
        description,
        children,
    } = props;

    let config = use_site_config();
    let document_title = config.site_title(&title);

    rsx! {
        document::Title { "{document_title}" }
        div { class: "page",
            if heading.is_some() || description.is_some() {
                div { class: "page-header",
                    if let Some(heading) = heading {
                        h1 { class: "page-title", "{heading}" }
                    }
                    if let Some(description) = description {
                        p { class: "page-description", "{description}" }
                    }
                }
            }
            {children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SkeletonProps {
    #[props(default = 3)]
    count: usize,
    #[props(default = 160)]
    height: u32,
}

#[component]
pub fn SkeletonGrid(props: SkeletonProps) -> Element {
    let height = props.height;

    rsx! {
        div { class: "card-grid",
            for _ in 0..props.count {
                div { class: "skeleton", style: "height: {height}px;" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct EmptyStateProps {
    message: String,
}

// upstream failures land here too, the fetchers have already logged them
#[component]
pub fn EmptyState(props: EmptyStateProps) -> Element {
    rsx! {
        div { class: "empty-state", "{props.message}" }
    }
}
