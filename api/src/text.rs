use serde::Deserialize;

use crate::fetch::{Record, decode_rows, fetch_or};
use crate::source::{RowSource, TableQuery};

// singleton text content: one table each, the first row's `data` column

pub const TAGLINE_TABLE: &str = "tagline";
pub const HOME_ABOUT_TABLE: &str = "home-about";
pub const PRIVACY_POLICY_TABLE: &str = "privacy-policy";

pub const TAGLINE_FALLBACK: &str = "A relatively new developer looking to gain experience.";
pub const PRIVACY_POLICY_FALLBACK: &str = "Error while fetching privacy policy.";
pub const HOME_ABOUT_FALLBACK: &str = "";

#[derive(Debug, Deserialize)]
struct TextRow {
    data: String,
}

impl Record for TextRow {
    fn validate(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub async fn fetch_text(source: &impl RowSource, table: &str, fallback: &str) -> String {
    fetch_or(table, fallback.to_owned(), async {
        let rows = source.select(&TableQuery::new(table).limit(1)).await?;

        decode_rows::<TextRow>(table, rows)?
            .into_iter()
            .next()
            .map(|row| row.data)
            .ok_or_else(|| anyhow::Error::msg(format!("{table} has no rows")))
    })
    .await
}

pub async fn fetch_tagline(source: &impl RowSource) -> String {
    fetch_text(source, TAGLINE_TABLE, TAGLINE_FALLBACK).await
}

pub async fn fetch_home_about(source: &impl RowSource) -> String {
    fetch_text(source, HOME_ABOUT_TABLE, HOME_ABOUT_FALLBACK).await
}

pub async fn fetch_privacy_policy(source: &impl RowSource) -> String {
    fetch_text(source, PRIVACY_POLICY_TABLE, PRIVACY_POLICY_FALLBACK).await
}
