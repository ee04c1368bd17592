use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product category as returned by the storefront API.
///
/// Only `id` and `name` are checked when a response is parsed. Every other
/// field the backend sends is kept in `extra` and written back out unchanged,
/// so a category serializes to the same JSON object it was read from.
///
/// The id is read from `id`, or from `categoryId` as the bookstore backend
/// names it. It is always written back out as `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Category {
    #[serde(alias = "categoryId")]
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    #[cfg_attr(feature = "ts", ts(skip))]
    pub extra: Map<String, Value>,
}

/// Categories in the order the backend returned them.
pub type CategoryList = Vec<Category>;

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            extra: Map::new(),
        }
    }

    /// Look up a backend field that isn't part of the checked schema
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Case-insensitive name comparison, used when views route by name
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
