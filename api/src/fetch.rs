use std::future::Future;

use anyhow::Context;
use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, error, warn};

// a typed row from one of the upstreams
//
// deserialization checks the shape, validate() checks whatever serde can't
pub trait Record: DeserializeOwned {
    fn validate(&self) -> anyhow::Result<()>;
}

// the parse boundary: any malformed row fails the whole batch
pub fn decode_rows<T: Record>(what: &str, rows: Vec<Value>) -> anyhow::Result<Vec<T>> {
    rows.into_iter()
        .enumerate()
        .map(|(idx, row)| decode_row(what, idx, row))
        .collect()
}

fn decode_row<T: Record>(what: &str, idx: usize, row: Value) -> anyhow::Result<T> {
    let record: T = serde_json::from_value(row)
        .inspect_err(|err| error!("malformed {what} row {idx}: {err}"))
        .with_context(|| format!("malformed {what} row {idx}"))?;

    record
        .validate()
        .inspect_err(|err| error!("invalid {what} row {idx}: {err}"))
        .with_context(|| format!("invalid {what} row {idx}"))?;

    Ok(record)
}

// await a fetch, and on failure log it and hand back the fallback instead
//
// every content fetcher goes through here, so no upstream error ever reaches a page
pub async fn fetch_or<T, F>(what: &str, fallback: T, fetch: F) -> T
where
    F: Future<Output = anyhow::Result<T>>,
{
    match fetch.await {
        Ok(val) => {
            debug!("fetched {what}");
            val
        }
        Err(err) => {
            warn!("failed to fetch {what}, using fallback: {err:#}");
            fallback
        }
    }
}

pub fn apply_limit<T>(mut items: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        items.truncate(limit);
    }
    items
}

pub fn require(field: &str, value: &str) -> anyhow::Result<()> {
    if value.trim().is_empty() {
        Err(anyhow::Error::msg(format!("{field} is empty")))
    } else {
        Ok(())
    }
}

// ids come back as text from some tables and as integers from others
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(val) => val,
        Id::Int(val) => val.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::json;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Named {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
        name: String,
    }

    impl Record for Named {
        fn validate(&self) -> anyhow::Result<()> {
            require("name", &self.name)
        }
    }

    #[test]
    fn decodes_mixed_ids() {
        let rows = vec![json!({"id": 7, "name": "a"}), json!({"id": "x", "name": "b"})];

        let named: Vec<Named> = decode_rows("named", rows).unwrap();
        assert_eq!(named[0].id, "7");
        assert_eq!(named[1].id, "x");
    }

    #[test]
    fn malformed_row_fails_batch() {
        let rows = vec![json!({"id": 1, "name": "a"}), json!({"id": 2})];

        let err = decode_rows::<Named>("named", rows).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn invalid_row_fails_batch() {
        let rows = vec![json!({"id": 1, "name": "  "})];
        assert!(decode_rows::<Named>("named", rows).is_err());
    }

    #[test]
    fn fallback_on_error() {
        let val = block_on(fetch_or("numbers", vec![0], async {
            Err::<Vec<i32>, _>(anyhow::Error::msg("connection refused"))
        }));
        assert_eq!(val, vec![0]);
    }

    #[test]
    fn passes_through_success() {
        let val = block_on(fetch_or("numbers", Vec::new(), async { Ok(vec![1, 2]) }));
        assert_eq!(val, vec![1, 2]);
    }

    #[test]
    fn limit_truncates() {
        assert_eq!(apply_limit(vec![1, 2, 3], Some(2)), vec![1, 2]);
        assert_eq!(apply_limit(vec![1, 2, 3], Some(10)), vec![1, 2, 3]);
        assert_eq!(apply_limit(vec![1, 2, 3], None), vec![1, 2, 3]);
        assert!(apply_limit(vec![1, 2, 3], Some(0)).is_empty());
    }
}
