use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw search request as received from the caller.
///
/// Every field is optional and loosely typed; `SearchParams::new` coerces each
/// one and falls back to defaults where coercion fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchParamsInput {
    #[serde(default)]
    pub page: Option<Value>,
    #[serde(default)]
    pub limit: Option<Value>,
    #[serde(default)]
    pub sort: Option<Value>,
    #[serde(default)]
    pub order: Option<Value>,
    #[serde(default)]
    pub filter: Option<Value>,
}

impl SearchParamsInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: impl Into<Value>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn limit(mut self, limit: impl Into<Value>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<Value>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn order(mut self, order: impl Into<Value>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn filter(mut self, filter: impl Into<Value>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}
