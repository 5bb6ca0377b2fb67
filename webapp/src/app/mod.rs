pub mod config;
pub mod content;
pub mod storage;
pub mod style;
pub mod theme;
pub mod viewport;

use chrono::{DateTime, Utc};

pub fn display_date(dt: &Option<DateTime<Utc>>) -> String {
    match dt {
        Some(dt) => dt.format("%a, %d %b %Y").to_string(),
        None => String::from("undated"),
    }
}
