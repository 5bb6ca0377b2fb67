use dioxus::prelude::*;

use api::{
    about::{AboutSection, fetch_about},
    resume::{ResumeItem, ResumeKind, fetch_education, fetch_work},
};
use common::{markdown::substitute_link_color, site::SiteRoute};

use crate::{
    app::{content::use_content, theme::use_palette},
    components::{
        contact::ContactMethods,
        markdown::Markdown,
        page::{EmptyState, Page, SkeletonGrid},
        resume::ResumeCard,
    },
};

#[component]
fn AboutSectionBlock(section: AboutSection) -> Element {
    let palette = use_palette();

    rsx! {
        div { class: "section", id: "{section.id}",
            h2 { class: "section-title", "{section.title}" }
            if section.is_contact() {
                ContactMethods {}
            } else {
                Markdown { content: substitute_link_color(&section.body, &palette) }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let content = use_content();

    let sections_future = use_resource({
        let content = content.clone();
        move || {
            let content = content.clone();
            async move { fetch_about(&content.backend, None).await }
        }
    });

    let resume_future = use_resource(move || {
        let content = content.clone();
        async move {
            let (work, education) = futures::join!(
                fetch_work(&content.backend),
                fetch_education(&content.backend),
            );
            (work, education)
        }
    });

    let sections: Option<Vec<AboutSection>> = sections_future.read().clone();
    let resume: Option<(Vec<ResumeItem>, Vec<ResumeItem>)> = resume_future.read().clone();

    rsx! {
        Page { title: SiteRoute::About.title_name(), heading: "About Me",
            match sections {
                Some(sections) if sections.is_empty() => rsx! {
                    EmptyState { message: "Nothing to tell yet." }
                },
                Some(sections) => rsx! {
                    for section in sections {
                        AboutSectionBlock { key: "{section.id}", section: section.clone() }
                    }
                },
                None => rsx! {
                    SkeletonGrid { count: 2, height: 120 }
                },
            }

            div { class: "section",
                h2 { class: "section-title", "Resume" }
                match resume {
                    Some((work, education)) => rsx! {
                        div { class: "card-grid",
                            ResumeCard { kind: ResumeKind::Work, items: work }
                            ResumeCard { kind: ResumeKind::Education, items: education }
                        }
                    },
                    None => rsx! {
                        SkeletonGrid { count: 2 }
                    },
                }
            }
        }
    }
}
