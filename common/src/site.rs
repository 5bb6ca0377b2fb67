use crate::config::SiteConfig;

// top-level pages with a fixed path
//
// blog posts live under /blog/<slug> and take their title from the post
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SiteRoute {
    Home,
    About,
    Projects,
    Blog,
    PrivacyPolicy,
}

impl SiteRoute {
    pub fn title_name(self) -> &'static str {
        match self {
            SiteRoute::Home => "",
            SiteRoute::About => "About",
            SiteRoute::Projects => "Projects",
            SiteRoute::Blog => "Blog",
            SiteRoute::PrivacyPolicy => "Privacy Policy",
        }
    }
}

pub fn make_site_title(owner: &str, title: &str) -> String {
    if title.is_empty() {
        owner.to_owned()
    } else {
        format!("{title} | {owner}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    Internal(SiteRoute),
    External(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Anchor {
    pub title: String,
    pub target: LinkTarget,
}

impl Anchor {
    fn internal(title: &str, route: SiteRoute) -> Self {
        Anchor {
            title: title.to_owned(),
            target: LinkTarget::Internal(route),
        }
    }

    fn external(title: &str, href: String) -> Self {
        Anchor {
            title: title.to_owned(),
            target: LinkTarget::External(href),
        }
    }
}

pub fn nav_anchors() -> Vec<Anchor> {
    vec![
        Anchor::internal("Home", SiteRoute::Home),
        Anchor::internal("Projects", SiteRoute::Projects),
        Anchor::internal("About", SiteRoute::About),
    ]
}

// footer entries; links that were left blank in the config are skipped
pub fn footer_anchors(config: &SiteConfig) -> Vec<Anchor> {
    let mut anchors = vec![Anchor::internal(&config.owner_name, SiteRoute::About)];

    if !config.links.github.is_empty() {
        anchors.push(Anchor::external("Github", config.links.github.clone()));
    }

    if !config.links.email.is_empty() {
        anchors.push(Anchor::external(
            &config.links.email,
            format!("mailto:{}", config.links.email),
        ));
    }

    anchors.push(Anchor::internal("Privacy Policy", SiteRoute::PrivacyPolicy));
    anchors
}
