use serde::{Deserialize, Serialize};

use crate::fetch::{Record, apply_limit, decode_rows, fetch_or, require, string_or_number};
use crate::source::{Direction, RowSource, TableQuery};

pub const PROJECTS_TABLE: &str = "projects";

// structs and types

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub last_updated: String,
    // 0 to 1, higher is shown first
    pub importance: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub img_src: Option<String>,
    #[serde(default)]
    pub frameworks: Vec<String>,
    #[serde(default)]
    pub contributors: Vec<String>,
    #[serde(default)]
    pub is_abandoned: bool,
    #[serde(default, rename = "projectAnalysis")]
    pub analysis: Option<ProjectAnalysis>,
    #[serde(default)]
    pub buttons: Vec<ProjectButton>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAnalysis {
    pub project_type: String,
    pub project_condition: String,
    #[serde(default, rename = "languageUsePercentage")]
    pub language_use: Vec<LanguageUse>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LanguageUse {
    pub title: String,
    // share of the codebase, 0 to 1
    pub perc: f64,
}

impl LanguageUse {
    pub fn label(&self) -> String {
        format!("{} {:.1}%", self.title, self.perc * 100.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectButton {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl Record for Project {
    fn validate(&self) -> anyhow::Result<()> {
        require("id", &self.id)?;
        require("title", &self.title)?;

        if !(0.0..=1.0).contains(&self.importance) {
            return Err(anyhow::Error::msg(format!(
                "importance {} outside 0..=1",
                self.importance
            )));
        }

        for button in &self.buttons {
            require("button link", &button.link)?;
        }

        Ok(())
    }
}

// most important first; ties keep the upstream order
pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.importance.total_cmp(&a.importance));
}

pub async fn fetch_projects(source: &impl RowSource, limit: Option<usize>) -> Vec<Project> {
    fetch_or("projects", Vec::new(), async {
        let query = TableQuery::new(PROJECTS_TABLE).order_by("importance", Direction::Descending);

        let mut projects: Vec<Project> = decode_rows("project", source.select(&query).await?)?;
        sort_projects(&mut projects);

        Ok(apply_limit(projects, limit))
    })
    .await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde_json::{Value, json};

    use super::*;
    use crate::testing::FakeRows;

    fn project(id: i64, importance: f64) -> Value {
        json!({
            "id": id,
            "title": format!("Project {id}"),
            "shortDescription": "short",
            "description": "long",
            "lastUpdated": "2024-01-01",
            "importance": importance,
            "skills": ["Rust"],
        })
    }

    #[test]
    fn fetch_failure_is_empty() {
        let source = FakeRows::default();
        assert!(block_on(fetch_projects(&source, None)).is_empty());
    }

    #[test]
    fn ordered_by_importance() {
        let source = FakeRows::default().with(
            PROJECTS_TABLE,
            json!([project(1, 0.5), project(2, 0.98), project(3, 0.9)]),
        );

        let projects = block_on(fetch_projects(&source, None));
        let importance: Vec<f64> = projects.iter().map(|p| p.importance).collect();

        assert_eq!(importance, vec![0.98, 0.9, 0.5]);
        assert_eq!(
            source.queries.borrow()[0].order.as_ref().map(|o| o.column.as_str()),
            Some("importance")
        );
    }

    #[test]
    fn limit_applies_after_sorting() {
        let source = FakeRows::default().with(
            PROJECTS_TABLE,
            json!([project(1, 0.1), project(2, 0.7), project(3, 0.4)]),
        );

        let projects = block_on(fetch_projects(&source, Some(2)));
        let ids: Vec<&str> = projects.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn malformed_row_empties_result() {
        let source = FakeRows::default().with(
            PROJECTS_TABLE,
            json!([project(1, 0.5), {"id": 2, "title": "no importance"}]),
        );

        assert!(block_on(fetch_projects(&source, None)).is_empty());
    }

    #[test]
    fn importance_out_of_range_is_invalid() {
        let source = FakeRows::default().with(PROJECTS_TABLE, json!([project(1, 1.5)]));
        assert!(block_on(fetch_projects(&source, None)).is_empty());
    }

    #[test]
    fn decodes_nested_fields() {
        let mut row = project(4, 0.3);
        row["projectAnalysis"] = json!({
            "projectType": "Mobile App",
            "projectCondition": "stable",
            "languageUsePercentage": [
                {"title": "TypeScript", "perc": 0.909},
                {"title": "JavaScript", "perc": 0.091},
            ],
        });
        row["buttons"] = json!([{"title": "View on Github", "link": "https://github.com/x/y"}]);

        let source = FakeRows::default().with(PROJECTS_TABLE, json!([row]));
        let projects = block_on(fetch_projects(&source, None));

        let analysis = projects[0].analysis.as_ref().unwrap();
        assert_eq!(analysis.project_condition, "stable");
        assert_eq!(analysis.language_use[0].title, "TypeScript");
        assert_eq!(analysis.language_use[0].label(), "TypeScript 90.9%");
        assert_eq!(analysis.language_use[1].label(), "JavaScript 9.1%");
        assert_eq!(projects[0].buttons[0].color, None);
    }
}
