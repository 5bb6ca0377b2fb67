use async_trait::async_trait;
use serde_json::Value;

// the two upstreams the site reads from
//
// both are read-only from our side, and neither future is Send since the
// browser fetch api is single-threaded

// rows from the hosted database
#[async_trait(?Send)]
pub trait RowSource {
    async fn select(&self, query: &TableQuery) -> anyhow::Result<Vec<Value>>;
}

// graphql documents from the headless cms
//
// implementations return the `data` member of the response and turn a
// non-empty `errors` member into an Err
#[async_trait(?Send)]
pub trait CmsSource {
    async fn query(&self, query: &str, variables: Value) -> anyhow::Result<Value>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub direction: Direction,
}

// a single-table read: select *, equality filters, one ordering, optional limit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableQuery {
    pub table: String,
    pub filters: Vec<(String, String)>,
    pub order: Option<Order>,
    pub limit: Option<usize>,
}

impl TableQuery {
    pub fn new(table: &str) -> Self {
        TableQuery {
            table: table.to_owned(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters.push((column.to_owned(), value.to_owned()));
        self
    }

    pub fn order_by(mut self, column: &str, direction: Direction) -> Self {
        self.order = Some(Order {
            column: column.to_owned(),
            direction,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    // query parameters in the rest dialect the backend speaks, unencoded
    //
    // the http client takes care of percent-encoding the values
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = vec![(String::from("select"), String::from("*"))];

        for (column, value) in &self.filters {
            params.push((column.clone(), format!("eq.{value}")));
        }

        if let Some(order) = &self.order {
            let direction = match order.direction {
                Direction::Ascending => "asc",
                Direction::Descending => "desc",
            };
            params.push((String::from("order"), format!("{}.{direction}", order.column)));
        }

        if let Some(limit) = self.limit {
            params.push((String::from("limit"), limit.to_string()));
        }

        params
    }
}

// unwrap a graphql response body into its data member
pub fn graphql_data(mut body: Value) -> anyhow::Result<Value> {
    if let Some(errors) = body.get("errors").and_then(Value::as_array) {
        if let Some(first) = errors.first() {
            let message = first
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown graphql error");

            return Err(anyhow::Error::msg(format!(
                "cms returned {} error(s): {message}",
                errors.len()
            )));
        }
    }

    match body.get_mut("data").map(Value::take) {
        Some(Value::Null) | None => Err(anyhow::Error::msg("cms response has no data")),
        Some(data) => Ok(data),
    }
}
