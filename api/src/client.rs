use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::{Value, json};
use tracing::{Level, debug, instrument};

use crate::source::{CmsSource, RowSource, TableQuery, graphql_data};

// rest client for the hosted database
//
// only the anonymous key is ever used here, row-level security on the
// backend is what keeps this read-only
#[derive(Clone, Debug, PartialEq)]
pub struct BackendClient {
    url: String,
    anon_key: String,
}

impl BackendClient {
    pub fn new(url: &str, anon_key: &str) -> Self {
        BackendClient {
            url: url.trim_end_matches('/').to_owned(),
            anon_key: anon_key.to_owned(),
        }
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }
}

#[async_trait(?Send)]
impl RowSource for BackendClient {
    #[instrument(level=Level::DEBUG, skip(self))]
    async fn select(&self, query: &TableQuery) -> anyhow::Result<Vec<Value>> {
        let params = query.params();

        let resp = Request::get(&self.table_url(&query.table))
            .query(params.iter().map(|(k, v)| (k.as_str(), v)))
            .header("apikey", &self.anon_key)
            .header("Authorization", &format!("Bearer {}", self.anon_key))
            .header("Accept", "application/json")
            .send()
            .await?;

        if !resp.ok() {
            return Err(anyhow::Error::msg(format!(
                "{} returned {}: {}",
                query.table,
                resp.status(),
                resp.text().await?
            )));
        }

        let rows: Vec<Value> = resp.json().await?;

        debug!("fetched {} rows from {}", rows.len(), query.table);
        Ok(rows)
    }
}

// graphql client for the headless cms
#[derive(Clone, Debug, PartialEq)]
pub struct CmsClient {
    url: String,
    token: String,
}

impl CmsClient {
    pub fn new(url: &str, token: &str) -> Self {
        CmsClient {
            url: url.to_owned(),
            token: token.to_owned(),
        }
    }
}

#[async_trait(?Send)]
impl CmsSource for CmsClient {
    #[instrument(level=Level::DEBUG, skip(self, query))]
    async fn query(&self, query: &str, variables: Value) -> anyhow::Result<Value> {
        let mut req = Request::post(&self.url);

        if !self.token.is_empty() {
            req = req.header("X-API-KEY", &self.token);
        }

        let resp = req
            .json(&json!({"query": query, "variables": variables}))?
            .send()
            .await?;

        if resp.ok() {
            graphql_data(resp.json().await?)
        } else {
            Err(anyhow::Error::msg(format!(
                "cms returned {}: {}",
                resp.status(),
                resp.text().await?
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_ignores_trailing_slash() {
        let client = BackendClient::new("https://example.supabase.co/", "anon");
        assert_eq!(
            client.table_url("projects"),
            "https://example.supabase.co/rest/v1/projects"
        );
    }
}
