use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::blog::{BlogPost, fetch_posts};
use common::site::SiteRoute;

use crate::{
    Route,
    app::{content::use_content, display_date},
    components::page::{EmptyState, Page, SkeletonGrid},
};

#[component]
fn PostCard(post: BlogPost) -> Element {
    let date = display_date(&post.published_at);

    rsx! {
        Link {
            class: "card post-card",
            to: Route::BlogDetail { slug: post.slug.clone() },
            div { class: "card-title", "{post.title}" }
            div { class: "project-meta",
                span { class: "badge dark", "{date}" }
                if post.read_time > 0 {
                    span { class: "badge muted", "{post.read_time} min read" }
                }
            }
            if !post.excerpt.is_empty() {
                p { "{post.excerpt}" }
            }
        }
    }
}

#[component]
pub fn BlogList() -> Element {
    let content = use_content();

    let posts_future = use_resource(move || {
        let content = content.clone();
        async move { fetch_posts(&content.cms, None).await }
    });

    let posts: Option<Vec<BlogPost>> = posts_future.read().clone();

    rsx! {
        Page {
            title: SiteRoute::Blog.title_name(),
            heading: "Blog",
            description: "Notes on what I have been working on.",
            match posts {
                Some(posts) if posts.is_empty() => rsx! {
                    EmptyState { message: "No posts yet." }
                },
                Some(posts) => rsx! {
                    div { class: "card-grid single",
                        for post in posts {
                            PostCard { key: "{post.slug}", post: post.clone() }
                        }
                    }
                },
                None => rsx! {
                    SkeletonGrid { count: 3, height: 120 }
                },
            }
        }
    }
}
