use serde::{Deserialize, Serialize};

use crate::fetch::{Record, apply_limit, decode_rows, fetch_or, require, string_or_number};
use crate::source::{Direction, RowSource, TableQuery};

pub const ABOUT_TABLE: &str = "about";

// the section whose body is replaced by the contact methods
pub const CONTACT_SECTION_ID: &str = "contact";

// one titled block on the about page
//
// the body is markdown and may carry raw html with a ${linkColor} placeholder
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AboutSection {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub order: i64,
}

impl AboutSection {
    pub fn is_contact(&self) -> bool {
        self.id == CONTACT_SECTION_ID
    }
}

impl Record for AboutSection {
    fn validate(&self) -> anyhow::Result<()> {
        require("id", &self.id)?;
        require("title", &self.title)
    }
}

// reading order, top of the page first
pub fn sort_sections(sections: &mut [AboutSection]) {
    sections.sort_by(|a, b| a.order.cmp(&b.order));
}

pub async fn fetch_about(source: &impl RowSource, limit: Option<usize>) -> Vec<AboutSection> {
    fetch_or("about sections", Vec::new(), async {
        let query = TableQuery::new(ABOUT_TABLE).order_by("order", Direction::Ascending);

        let mut sections: Vec<AboutSection> =
            decode_rows("about section", source.select(&query).await?)?;
        sort_sections(&mut sections);

        Ok(apply_limit(sections, limit))
    })
    .await
}
