use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::{
    blog::{BlogPost, fetch_posts},
    project::{Project, fetch_projects},
    text::{fetch_home_about, fetch_tagline},
};

use crate::{
    Route,
    app::{content::use_content, display_date},
    components::{
        markdown::Markdown,
        page::{EmptyState, Page, SkeletonGrid},
        project_card::ProjectCard,
    },
};

const HOME_PROJECTS: usize = 3;
const HOME_POSTS: usize = 3;

#[derive(Clone, PartialEq)]
struct HomeContent {
    tagline: String,
    about: String,
    projects: Vec<Project>,
    posts: Vec<BlogPost>,
}

#[component]
fn LatestPosts(posts: Vec<BlogPost>) -> Element {
    if posts.is_empty() {
        return rsx! {
            EmptyState { message: "No posts yet." }
        };
    }

    rsx! {
        div { class: "card-grid",
            for post in posts {
                Link {
                    key: "{post.slug}",
                    class: "card post-card",
                    to: Route::BlogDetail { slug: post.slug.clone() },
                    div { class: "card-title", "{post.title}" }
                    span { class: "badge muted", {display_date(&post.published_at)} }
                    if !post.excerpt.is_empty() {
                        p { "{post.excerpt}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let content = use_content();

    // four independent fetches, awaited together
    let home_future = use_resource(move || {
        let content = content.clone();
        async move {
            let (tagline, about, projects, posts) = futures::join!(
                fetch_tagline(&content.backend),
                fetch_home_about(&content.backend),
                fetch_projects(&content.backend, Some(HOME_PROJECTS)),
                fetch_posts(&content.cms, Some(HOME_POSTS)),
            );

            HomeContent {
                tagline,
                about,
                projects,
                posts,
            }
        }
    });

    let home = home_future.read().clone();

    rsx! {
        Page { title: "",
            match home {
                Some(home) => rsx! {
                    div { class: "page-header",
                        h1 { class: "page-title", "Hi there!" }
                        p { class: "page-description", "{home.tagline}" }
                    }

                    if !home.about.is_empty() {
                        div { class: "section",
                            Markdown { content: home.about }
                        }
                    }

                    div { class: "section",
                        h2 { class: "section-title", "Projects" }
                        if home.projects.is_empty() {
                            EmptyState { message: "No projects to show." }
                        }
                        div { class: "card-grid",
                            for project in home.projects {
                                ProjectCard { key: "{project.id}", project: project.clone(), detailed: false }
                            }
                        }
                        Link { class: "btn btn-subtle", to: Route::Projects {}, "All projects" }
                    }

                    div { class: "section",
                        h2 { class: "section-title", "Latest posts" }
                        LatestPosts { posts: home.posts }
                        Link { class: "btn btn-subtle", to: Route::BlogList {}, "All posts" }
                    }
                },
                None => rsx! {
                    div { class: "page-header",
                        div { class: "skeleton", style: "height: 48px;" }
                    }
                    SkeletonGrid { count: HOME_PROJECTS }
                },
            }
        }
    }
}
