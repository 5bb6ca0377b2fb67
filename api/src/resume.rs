use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fetch::{Record, apply_limit, decode_rows, fetch_or, require, string_or_number};
use crate::source::{Direction, RowSource, TableQuery};

pub const RESUME_TABLE: &str = "resume";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeKind {
    Work,
    Education,
}

impl ResumeKind {
    pub fn heading(self) -> &'static str {
        match self {
            ResumeKind::Work => "Work",
            ResumeKind::Education => "Education",
        }
    }
}

impl fmt::Display for ResumeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResumeKind::Work => write!(f, "work"),
            ResumeKind::Education => write!(f, "education"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResumeKind,
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default, rename = "iconUrl")]
    pub icon_url: Option<String>,
    pub order: i64,
}

impl Record for ResumeItem {
    fn validate(&self) -> anyhow::Result<()> {
        require("id", &self.id)?;
        require("company", &self.company)
    }
}

pub fn sort_resume(items: &mut [ResumeItem]) {
    items.sort_by(|a, b| b.order.cmp(&a.order));
}

pub async fn fetch_resume(
    source: &impl RowSource,
    kind: ResumeKind,
    limit: Option<usize>,
) -> Vec<ResumeItem> {
    fetch_or(&format!("{kind} resume"), Vec::new(), async {
        let query = TableQuery::new(RESUME_TABLE)
            .eq("type", &kind.to_string())
            .order_by("order", Direction::Descending);

        let mut items: Vec<ResumeItem> = decode_rows("resume", source.select(&query).await?)?;

        // the filter is applied upstream, but a row of the wrong kind would
        // end up under the wrong heading
        if let Some(item) = items.iter().find(|item| item.kind != kind) {
            return Err(anyhow::Error::msg(format!(
                "resume row {} is {}, expected {kind}",
                item.id, item.kind
            )));
        }

        sort_resume(&mut items);
        Ok(apply_limit(items, limit))
    })
    .await
}

pub async fn fetch_work(source: &impl RowSource) -> Vec<ResumeItem> {
    fetch_resume(source, ResumeKind::Work, None).await
}

pub async fn fetch_education(source: &impl RowSource) -> Vec<ResumeItem> {
    fetch_resume(source, ResumeKind::Education, None).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::{Value, json};

    use super::*;
    use crate::testing::FakeRows;

    fn item(id: i64, kind: &str, order: i64) -> Value {
        json!({
            "id": id,
            "type": kind,
            "company": format!("Company {id}"),
            "position": "Engineer",
            "start": "2021",
            "end": "2023",
            "order": order,
        })
    }

    fn source() -> FakeRows {
        FakeRows::default().with(
            RESUME_TABLE,
            json!([
                item(1, "work", 1),
                item(2, "education", 5),
                item(3, "work", 3),
                item(4, "work", 2),
            ]),
        )
    }

    #[test]
    fn work_by_descending_order() {
        let source = source();
        let items = block_on(fetch_work(&source));

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4", "1"]);
        assert_eq!(
            source.queries.borrow()[0].filters,
            vec![(String::from("type"), String::from("work"))]
        );
    }

    #[test]
    fn education_only() {
        let items = block_on(fetch_education(&source()));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].kind, ResumeKind::Education);
        assert_eq!(items[0].icon_url, None);
    }

    #[test]
    fn limit() {
        let items = block_on(fetch_resume(&source(), ResumeKind::Work, Some(1)));
        assert_eq!(items[0].id, "3");
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn blank_company_is_malformed() {
        let mut row = item(2, "work", 2);
        row["company"] = json!("");

        let source = FakeRows::default().with(RESUME_TABLE, json!([item(1, "work", 1), row]));
        assert!(block_on(fetch_work(&source)).is_empty());
    }

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(ResumeKind::Education.to_string(), "education");
        assert!(serde_json::from_value::<ResumeKind>(json!("volunteering")).is_err());
    }

    #[test]
    fn failure_is_empty() {
        assert!(block_on(fetch_work(&FakeRows::default())).is_empty());
    }
}
