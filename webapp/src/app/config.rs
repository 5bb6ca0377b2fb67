use common::config::*;

// compiled in, so a broken file is caught on the first page load of a new build
const SITE_TOML: &str = include_str!("../../site.toml");

pub fn load_site_config() -> SiteConfig {
    let mut config = parse_config(SITE_TOML).expect("failed to parse site config");

    config.apply_overrides([
        (ENV_RESUME_URL, option_env!("PORTFOLIO_RESUME_URL")),
        (ENV_GITHUB_URL, option_env!("PORTFOLIO_GITHUB_URL")),
        (ENV_EMAIL, option_env!("PORTFOLIO_EMAIL")),
        (ENV_BACKEND_URL, option_env!("PORTFOLIO_SUPABASE_URL")),
        (ENV_BACKEND_KEY, option_env!("PORTFOLIO_SUPABASE_KEY")),
        (ENV_CMS_URL, option_env!("PORTFOLIO_CMS_URL")),
        (ENV_CMS_TOKEN, option_env!("PORTFOLIO_CMS_TOKEN")),
    ]);

    config
}
