use serde::{Deserialize, Serialize};

use crate::models::{Category, Product};

/// Local narrowing of the catalog snapshot. `None` means no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// `Some(true)` keeps only stocked products; `Some(false)` is an
    /// unticked box and keeps everything.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl CatalogFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category {
            if product.category != category {
                return false;
            }
        }
        if let Some(min_price) = self.min_price {
            if product.price < min_price {
                return false;
            }
        }
        if self.in_stock == Some(true) && product.stock_quantity <= 0 {
            return false;
        }
        true
    }

    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Category select box: `""` or `"all"` clears the constraint.
    pub fn select_category(&mut self, value: &str) {
        self.category = value.parse::<Category>().ok();
    }
}
