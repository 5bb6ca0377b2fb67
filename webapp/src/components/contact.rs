use dioxus::prelude::*;

use crate::app::content::use_site_config;

// takes the place of the "contact" about section
#[component]
pub fn ContactMethods() -> Element {
    let config = use_site_config();
    let links = config.links;

    let email = links.email.trim().to_owned();
    let github = links.github.trim().to_owned();

    if email.is_empty() && github.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "project-buttons",
            if !email.is_empty() {
                a { class: "btn btn-accent", href: "mailto:{email}", "Email" }
            }
            if !github.is_empty() {
                a {
                    class: "btn btn-subtle",
                    href: "{github}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Github"
                }
            }
        }
    }
}
