use dioxus::prelude::*;

use api::text::fetch_privacy_policy;
use common::site::SiteRoute;

use crate::{
    app::content::use_content,
    components::{
        markdown::Markdown,
        page::{Page, SkeletonGrid},
    },
};

#[component]
pub fn PrivacyPolicy() -> Element {
    let content = use_content();

    // never fails, a broken backend yields the fallback notice
    let policy_future = use_resource(move || {
        let content = content.clone();
        async move { fetch_privacy_policy(&content.backend).await }
    });

    let policy = policy_future.read().clone();

    rsx! {
        Page { title: SiteRoute::PrivacyPolicy.title_name(), heading: "Privacy Policy",
            match policy {
                Some(policy) => rsx! {
                    div { class: "section",
                        Markdown { content: policy }
                    }
                },
                None => rsx! {
                    SkeletonGrid { count: 1, height: 320 }
                },
            }
        }
    }
}
