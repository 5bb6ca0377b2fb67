use dioxus::prelude::*;

use api::{BackendClient, CmsClient};
use common::config::SiteConfig;

// upstream clients, built once from the site config and shared through context
#[derive(Clone, Debug, PartialEq)]
pub struct Content {
    pub backend: BackendClient,
    pub cms: CmsClient,
}

impl Content {
    pub fn new(config: &SiteConfig) -> Self {
        Content {
            backend: BackendClient::new(&config.backend.url, &config.backend.anon_key),
            cms: CmsClient::new(&config.cms.url, &config.cms.token),
        }
    }
}

pub fn use_content_provider(config: &SiteConfig) -> Content {
    let config = config.clone();
    use_context_provider(move || Content::new(&config))
}

pub fn use_content() -> Content {
    use_context::<Content>()
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
