use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::blog::{BlogPostDetail, PostLink, fetch_post, fetch_posts, post_neighbours};
use common::markdown::{Heading, extract_headings};

use crate::{
    Route,
    app::{content::use_content, display_date},
    components::{
        markdown::Markdown,
        page::{EmptyState, Page, SkeletonGrid},
    },
};

#[derive(Clone, Debug, PartialEq)]
struct LoadedPost {
    detail: BlogPostDetail,
    newer: Option<PostLink>,
    older: Option<PostLink>,
}

fn indent(level: u8) -> String {
    format!("padding-left: {}px;", u32::from(level.saturating_sub(1)) * 12)
}

#[component]
fn TableOfContents(headings: Vec<Heading>) -> Element {
    if headings.len() < 2 {
        return rsx! {};
    }

    rsx! {
        nav { class: "toc",
            strong { "Contents" }
            for heading in headings {
                a {
                    key: "{heading.id}",
                    href: "#{heading.id}",
                    style: indent(heading.level),
                    "{heading.text}"
                }
            }
        }
    }
}

#[component]
fn PostNavigation(newer: Option<PostLink>, older: Option<PostLink>) -> Element {
    rsx! {
        div { class: "post-nav",
            if let Some(newer) = newer {
                Link { class: "btn btn-subtle", to: Route::BlogDetail { slug: newer.slug.clone() },
                    "← {newer.title}"
                }
            } else {
                span {}
            }
            if let Some(older) = older {
                Link { class: "btn btn-subtle", to: Route::BlogDetail { slug: older.slug.clone() },
                    "{older.title} →"
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct BlogDetailProps {
    slug: String,
}

#[component]
pub fn BlogDetail(props: BlogDetailProps) -> Element {
    let content = use_content();

    // navigating between posts reuses this component with a new slug
    let slug = use_memo(use_reactive(&props.slug, |slug| slug));

    let post_future = use_resource(move || {
        let content = content.clone();
        async move {
            let slug = slug();

            let (detail, posts) =
                futures::join!(fetch_post(&content.cms, &slug), fetch_posts(&content.cms, None));

            detail.map(|detail| {
                let (newer, older) = post_neighbours(&detail, &posts);
                LoadedPost {
                    detail,
                    newer,
                    older,
                }
            })
        }
    });

    let loaded: Option<Option<LoadedPost>> = post_future.read().clone();

    let back = rsx! {
        Link { class: "btn btn-subtle", to: Route::BlogList {}, "← All posts" }
    };

    match loaded {
        Some(Some(loaded)) => {
            let LoadedPost {
                detail,
                newer,
                older,
            } = loaded;

            let date = display_date(&detail.post.published_at);
            let headings = extract_headings(&detail.body);

            rsx! {
                Page { title: detail.post.title.clone(), heading: detail.post.title.clone(),
                    {back}
                    div { class: "project-meta",
                        span { class: "badge dark", "{date}" }
                        span { class: "badge muted", "{detail.post.read_time} min read" }
                    }
                    TableOfContents { headings }
                    div { class: "section",
                        Markdown { content: detail.body.clone() }
                    }
                    PostNavigation { newer, older }
                }
            }
        }
        Some(None) => rsx! {
            Page { title: "Post not found",
                {back}
                EmptyState { message: "This post does not exist." }
            }
        },
        None => rsx! {
            Page { title: "",
                {back}
                SkeletonGrid { count: 1, height: 480 }
            }
        },
    }
}
