use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cultural,
    Standard,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cultural => "cultural",
            Category::Standard => "standard",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cultural" => Ok(Category::Cultural),
            "standard" => Ok(Category::Standard),
            other => Err(format!("unknown category {other:?}")),
        }
    }
}

/// A catalog record as stored and served. `id` is assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub image_url: String,
    pub stock_quantity: i64,
}

/// Insert payload: a product without an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub image_url: String,
    pub stock_quantity: i64,
}

impl Default for NewProduct {
    /// Blank add-product form.
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            category: Category::Standard,
            image_url: String::new(),
            stock_quantity: 0,
        }
    }
}

/// Display price in naira with two decimals, e.g. `₦15000.00`.
pub fn format_price(price: f64) -> String {
    format!("\u{20a6}{price:.2}")
}
