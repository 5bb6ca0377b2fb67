use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{Level, debug, instrument};

// portfolio configuration
//
// everything here is public by construction -- the file is compiled into the
// wasm bundle, so the backend key must be the anonymous, read-only one
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct SiteConfig {
    pub owner_name: String,
    #[serde(default)]
    pub description: String,

    pub backend: BackendConfig,
    pub cms: CmsConfig,

    #[serde(default)]
    pub links: LinkConfig,
}

// the hosted database serving rows over rest
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

// the headless cms serving blog posts over graphql
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CmsConfig {
    pub url: String,
    #[serde(default)]
    pub token: String,
}

// opaque link targets, passed through to the ui untouched
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct LinkConfig {
    #[serde(default)]
    pub resume: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub email: String,
}

// in order to extract the config table from a larger document, we need to specify it
// as a subtable of the root node, i.e. a substruct
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: SiteConfig,
}

pub const ENV_RESUME_URL: &str = "PORTFOLIO_RESUME_URL";
pub const ENV_GITHUB_URL: &str = "PORTFOLIO_GITHUB_URL";
pub const ENV_EMAIL: &str = "PORTFOLIO_EMAIL";
pub const ENV_BACKEND_URL: &str = "PORTFOLIO_SUPABASE_URL";
pub const ENV_BACKEND_KEY: &str = "PORTFOLIO_SUPABASE_KEY";
pub const ENV_CMS_URL: &str = "PORTFOLIO_CMS_URL";
pub const ENV_CMS_TOKEN: &str = "PORTFOLIO_CMS_TOKEN";

#[instrument(level=Level::DEBUG, skip(doc))]
pub fn parse_config(doc: &str) -> anyhow::Result<SiteConfig> {
    let data: TomlConfigFile = toml::from_str(doc).context("failed to parse site config")?;

    debug!("successfully parsed site config");
    Ok(data.config)
}

impl SiteConfig {
    // apply (name, value) pairs from the build environment
    //
    // unset or empty values leave the file's setting alone, and unknown names are ignored
    pub fn apply_overrides<'a>(&mut self, vars: impl IntoIterator<Item = (&'a str, Option<&'a str>)>) {
        for (name, value) in vars {
            let value = match value {
                Some(val) if !val.is_empty() => val.to_owned(),
                _ => continue,
            };

            let field = match name {
                ENV_RESUME_URL => &mut self.links.resume,
                ENV_GITHUB_URL => &mut self.links.github,
                ENV_EMAIL => &mut self.links.email,
                ENV_BACKEND_URL => &mut self.backend.url,
                ENV_BACKEND_KEY => &mut self.backend.anon_key,
                ENV_CMS_URL => &mut self.cms.url,
                ENV_CMS_TOKEN => &mut self.cms.token,
                _ => continue,
            };

            debug!("overriding {name} from environment");
            *field = value;
        }
    }

    pub fn site_title(&self, title: &str) -> String {
        crate::site::make_site_title(&self.owner_name, title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"
[config]
owner_name = "Jane Doe"
description = "Portfolio site for Jane Doe"

[config.backend]
url = "https://example.supabase.co"
anon_key = "public-anon-key"

[config.cms]
url = "https://content.example.io/content/abc/github/main"

[config.links]
github = "https://github.com/janedoe"
"#;

    #[test]
    fn parses_config_subtable() {
        let config = parse_config(DOC).unwrap();

        assert_eq!(config.owner_name, "Jane Doe");
        assert_eq!(config.backend.url, "https://example.supabase.co");
        assert_eq!(config.cms.token, "");
        assert_eq!(config.links.github, "https://github.com/janedoe");
        assert_eq!(config.links.resume, "");
    }

    #[test]
    fn rejects_missing_backend() {
        let doc = "[config]\nowner_name = \"Jane\"\n";
        assert!(parse_config(doc).is_err());
    }

    #[test]
    fn env_overrides_links() {
        let mut config = parse_config(DOC).unwrap();

        config.apply_overrides([
            (ENV_RESUME_URL, Some("https://cdn.example.com/resume.pdf")),
            (ENV_GITHUB_URL, None),
            (ENV_EMAIL, Some("")),
            ("SOMETHING_ELSE", Some("ignored")),
        ]);

        assert_eq!(config.links.resume, "https://cdn.example.com/resume.pdf");
        assert_eq!(config.links.github, "https://github.com/janedoe");
        assert_eq!(config.links.email, "");
    }

    #[test]
    fn site_title_uses_owner() {
        let config = parse_config(DOC).unwrap();
        assert_eq!(config.site_title("Blog"), "Blog | Jane Doe");
    }
}
