use dioxus::prelude::*;
use dioxus_router::prelude::*;

use common::site::{Anchor, LinkTarget, footer_anchors, nav_anchors};

use crate::{
    Route,
    app::{content::use_site_config, theme::use_palette, viewport::use_media_queries},
    components::theme_toggle::ToggleThemeButton,
};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
    #[props(default)]
    menu_signal: Option<Signal<bool>>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;
    let menu_signal = props.menu_signal;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path.is_child_of(&target) || current_path == (target) { "nav-link active" } else { "nav-link" },
            to: target,
            onclick: move |_| {
                if let Some(mut menu) = menu_signal {
                    menu.set(false);
                }
            },
            "{name}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct AnchorLinkProps {
    anchor: Anchor,
    #[props(default)]
    menu_signal: Option<Signal<bool>>,
}

#[component]
fn AnchorLink(props: AnchorLinkProps) -> Element {
    let title = props.anchor.title;

    match props.anchor.target {
        LinkTarget::Internal(route) => rsx! {
            NavBarButton { name: title, target: Route::from(route), menu_signal: props.menu_signal }
        },
        LinkTarget::External(href) => rsx! {
            a {
                class: "nav-link",
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                "{title}"
            }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavLinksProps {
    #[props(default)]
    menu_signal: Option<Signal<bool>>,
}

#[component]
fn NavLinks(props: NavLinksProps) -> Element {
    rsx! {
        for anchor in nav_anchors() {
            AnchorLink { key: "{anchor.title}", anchor: anchor.clone(), menu_signal: props.menu_signal }
        }
    }
}

// fixed header; on small screens the links collapse into a burger menu
#[component]
fn SiteHeader(menu_signal: Signal<bool>) -> Element {
    let config = use_site_config();
    let palette = use_palette();
    let queries = use_media_queries();

    let mut menu_signal = menu_signal;
    let menu_open = menu_signal();

    let header_style = if queries.sm && menu_open {
        format!("background-color: {}; margin: 0; top: 0;", palette.background)
    } else {
        String::from("background-color: transparent;")
    };

    rsx! {
        header { class: "app-header", style: "{header_style}",
            div { class: "nav-container",
                div { class: "logo",
                    Link {
                        to: Route::Home {},
                        onclick: move |_| menu_signal.set(false),
                        "{config.owner_name}"
                    }
                }

                if !queries.sm {
                    nav { class: "nav-links",
                        NavLinks {}
                    }
                }

                div { class: "nav-actions",
                    if queries.sm {
                        Link { class: "btn btn-accent", to: Route::BlogList {}, "Blog" }
                        button {
                            class: "btn btn-subtle",
                            title: if menu_open { "Close menu" } else { "Open menu" },
                            onclick: move |_| menu_signal.toggle(),
                            if menu_open { "✕" } else { "☰" }
                        }
                    } else {
                        Link { class: "nav-link", to: Route::BlogList {}, "Blog" }
                    }
                    ToggleThemeButton { size: 24 }
                }
            }
        }

        if queries.sm && menu_open {
            nav { class: "mobile-menu",
                NavLinks { menu_signal: Some(menu_signal) }
            }
        }
    }
}

#[component]
fn SiteFooter() -> Element {
    let config = use_site_config();

    rsx! {
        footer { class: "site-footer",
            for anchor in footer_anchors(&config) {
                AnchorLink { key: "{anchor.title}", anchor: anchor.clone() }
            }
        }
    }
}

// shared chrome around every page
#[component]
pub fn SiteLayout() -> Element {
    let palette = use_palette();
    let theme_variables = palette.css_variables();

    let menu_signal = use_signal(|| false);

    // the menu only exists on small screens, close it when growing past them
    let queries = use_media_queries();
    let mut menu_close = menu_signal;
    use_effect(use_reactive(&queries.sm, move |small| {
        if !small && *menu_close.peek() {
            menu_close.set(false);
        }
    }));

    rsx! {
        style { "{theme_variables}" }
        div { class: "site",
            SiteHeader { menu_signal }
            main { class: "site-main",
                Outlet::<Route> {}
            }
            SiteFooter {}
        }
    }
}
