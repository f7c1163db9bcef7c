use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Screens of the storefront. Every screen is reachable from every other by
/// explicit navigation; `Home` is where a session starts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "view", content = "product", rename_all = "kebab-case")]
pub enum View {
    #[default]
    Home,
    Cart,
    AddProduct,
    ProductDetail(Product),
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Cart => "cart",
            View::AddProduct => "add-product",
            View::ProductDetail(_) => "product-detail",
        }
    }
}
