use dioxus::prelude::*;

use api::project::{Project, ProjectButton};

use crate::components::markdown::Markdown;

#[derive(Clone, PartialEq, Props)]
pub struct ProjectCardProps {
    project: Project,
    // the home page only shows the summary
    #[props(default = true)]
    detailed: bool,
}

#[component]
fn ProjectButtons(buttons: Vec<ProjectButton>) -> Element {
    if buttons.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "project-buttons",
            for button in buttons {
                a {
                    key: "{button.link}",
                    class: "btn btn-accent",
                    style: match &button.color {
                        Some(color) => format!("background-color: {color};"),
                        None => String::new(),
                    },
                    href: "{button.link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{button.title}"
                }
            }
        }
    }
}

#[component]
pub fn ProjectCard(props: ProjectCardProps) -> Element {
    let ProjectCardProps { project, detailed } = props;

    let condition = project
        .analysis
        .as_ref()
        .map(|analysis| analysis.project_condition.clone())
        .filter(|condition| !condition.is_empty());

    let project_type = project
        .analysis
        .as_ref()
        .map(|analysis| analysis.project_type.clone())
        .filter(|project_type| !project_type.is_empty());

    let languages = project
        .analysis
        .as_ref()
        .map(|analysis| analysis.language_use.clone())
        .unwrap_or_default()
        .into_iter()
        .map(|language| language.label())
        .collect::<Vec<_>>();

    let contributors = project.contributors.join(", ");

    rsx! {
        div { class: "card project-card",
            if let Some(src) = &project.img_src {
                img { src: "{src}", alt: "{project.title}" }
            }

            div { class: "card-title", "{project.title}" }

            div { class: "project-meta",
                if let Some(project_type) = project_type {
                    span { class: "badge", "{project_type}" }
                }
                if let Some(condition) = condition {
                    span { class: "badge dark", "{condition}" }
                }
                if project.is_abandoned {
                    span { class: "badge muted", "Abandoned" }
                }
            }

            if !project.short_description.is_empty() {
                p { "{project.short_description}" }
            }

            if detailed {
                if !project.description.is_empty() {
                    Markdown { content: project.description.clone() }
                }

                if !project.skills.is_empty() || !project.frameworks.is_empty() {
                    div { class: "project-meta",
                        for skill in project.skills.iter().chain(project.frameworks.iter()) {
                            span { key: "{skill}", class: "badge muted", "{skill}" }
                        }
                    }
                }

                if !languages.is_empty() {
                    div { class: "project-meta",
                        for language in languages {
                            span { key: "{language}", class: "badge", "{language}" }
                        }
                    }
                }

                if !contributors.is_empty() {
                    p { class: "page-description", "Contributors: {contributors}" }
                }
            }

            ProjectButtons { buttons: project.buttons.clone() }

            if !project.last_updated.is_empty() {
                p { class: "page-description", "Last updated {project.last_updated}" }
            }
        }
    }
}
