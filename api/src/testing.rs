// in-memory upstreams for the fetcher tests

use std::{cell::RefCell, collections::HashMap};

use async_trait::async_trait;
use serde_json::Value;

use crate::source::{CmsSource, RowSource, TableQuery};

// tables that aren't registered behave like a dead network
#[derive(Default)]
pub struct FakeRows {
    tables: HashMap<String, Vec<Value>>,
    pub queries: RefCell<Vec<TableQuery>>,
}

impl FakeRows {
    pub fn with(mut self, table: &str, rows: Value) -> Self {
        let rows = match rows {
            Value::Array(rows) => rows,
            other => vec![other],
        };
        self.tables.insert(table.to_owned(), rows);
        self
    }
}

#[async_trait(?Send)]
impl RowSource for FakeRows {
    async fn select(&self, query: &TableQuery) -> anyhow::Result<Vec<Value>> {
        self.queries.borrow_mut().push(query.clone());

        let rows = self
            .tables
            .get(&query.table)
            .ok_or_else(|| anyhow::Error::msg("connection refused"))?;

        Ok(rows
            .iter()
            .filter(|row| {
                query
                    .filters
                    .iter()
                    .all(|(col, val)| row.get(col).and_then(Value::as_str) == Some(val.as_str()))
            })
            .cloned()
            .collect())
    }
}

pub struct FakeCms {
    response: Option<Value>,
    pub variables: RefCell<Vec<Value>>,
}

impl FakeCms {
    pub fn answering(data: Value) -> Self {
        FakeCms {
            response: Some(data),
            variables: RefCell::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        FakeCms {
            response: None,
            variables: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl CmsSource for FakeCms {
    async fn query(&self, _query: &str, variables: Value) -> anyhow::Result<Value> {
        self.variables.borrow_mut().push(variables);

        self.response
            .clone()
            .ok_or_else(|| anyhow::Error::msg("cms unreachable"))
    }
}
