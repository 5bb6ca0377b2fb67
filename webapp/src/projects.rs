use dioxus::prelude::*;

use api::project::{Project, fetch_projects};
use common::site::SiteRoute;

use crate::{
    app::content::use_content,
    components::{
        page::{EmptyState, Page, SkeletonGrid},
        project_card::ProjectCard,
    },
};

#[component]
pub fn Projects() -> Element {
    let content = use_content();

    let projects_future = use_resource(move || {
        let content = content.clone();
        async move { fetch_projects(&content.backend, None).await }
    });

    let projects: Option<Vec<Project>> = projects_future.read().clone();

    rsx! {
        Page {
            title: SiteRoute::Projects.title_name(),
            heading: "Projects",
            description: "Things I have built, most notable first.",
            match projects {
                Some(projects) if projects.is_empty() => rsx! {
                    EmptyState { message: "No projects to show." }
                },
                Some(projects) => rsx! {
                    div { class: "card-grid single",
                        for project in projects {
                            ProjectCard { key: "{project.id}", project: project.clone() }
                        }
                    }
                },
                None => rsx! {
                    SkeletonGrid { count: 4, height: 240 }
                },
            }
        }
    }
}
