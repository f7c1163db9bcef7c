use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Full catalog snapshot, serialized as a bare JSON array.
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductList {
    pub items: Vec<Product>,
}
