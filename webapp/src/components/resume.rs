use dioxus::prelude::*;

use api::resume::{ResumeItem, ResumeKind};

use crate::app::content::use_site_config;

#[derive(Clone, PartialEq, Props)]
pub struct ResumeCardProps {
    kind: ResumeKind,
    items: Vec<ResumeItem>,
}

#[component]
fn ResumeEntry(item: ResumeItem) -> Element {
    let dates = match (item.start.is_empty(), item.end.is_empty()) {
        (false, false) => format!("{} - {}", item.start, item.end),
        (false, true) => format!("{} - Present", item.start),
        (true, false) => item.end.clone(),
        (true, true) => String::new(),
    };

    rsx! {
        div { class: "resume-item",
            if let Some(icon) = &item.icon_url {
                img { src: "{icon}", alt: "{item.company}" }
            }
            div { class: "details",
                strong { "{item.company}" }
                if !item.position.is_empty() {
                    span { class: "dimmed", "{item.position}" }
                }
                if !dates.is_empty() {
                    span { class: "dimmed", "{dates}" }
                }
            }
        }
    }
}

#[component]
pub fn ResumeCard(props: ResumeCardProps) -> Element {
    let ResumeCardProps { kind, items } = props;

    let config = use_site_config();
    let resume_url = config.links.resume.trim().to_owned();
    let heading = kind.heading();

    rsx! {
        div { class: "card",
            div { class: "card-title", "{heading}" }

            if items.is_empty() {
                div { class: "empty-state", "Nothing here yet." }
            }

            for item in items {
                ResumeEntry { key: "{item.id}", item: item.clone() }
            }

            // the download link sits under the work history
            if kind == ResumeKind::Work && !resume_url.is_empty() {
                a {
                    class: "btn btn-subtle",
                    href: "{resume_url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Download Resume"
                }
            }
        }
    }
}
