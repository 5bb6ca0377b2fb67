#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

use common::site::SiteRoute;

mod app;
use app::{config::load_site_config, content::use_content_provider, style};

mod components;
use components::navigation::SiteLayout;

mod home;
use home::Home;

mod about;
use about::About;

mod projects;
use projects::Projects;

mod blog;
use blog::{BlogDetail, BlogList};

mod privacy;
use privacy::PrivacyPolicy;

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(SiteLayout)]
        #[route("/")]
        Home {},
        #[route("/about")]
        About {},
        #[route("/projects")]
        Projects {},
        #[nest("/blog")]
            #[route("/")]
            BlogList {},
            #[route("/:slug")]
            BlogDetail { slug: String },
        #[end_nest]
        #[route("/privacy-policy")]
        PrivacyPolicy {},
}

impl From<SiteRoute> for Route {
    fn from(route: SiteRoute) -> Self {
        match route {
            SiteRoute::Home => Route::Home {},
            SiteRoute::About => Route::About {},
            SiteRoute::Projects => Route::Projects {},
            SiteRoute::Blog => Route::BlogList {},
            SiteRoute::PrivacyPolicy => Route::PrivacyPolicy {},
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(load_site_config);
    use_content_provider(&config);

    app::theme::use_theme_provider();
    app::viewport::use_viewport_provider();

    let responsive = style::responsive_styles();

    rsx! {
        style { "{style::SITE_STYLES}" }
        style { "{responsive}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
