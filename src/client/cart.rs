use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Products copied into the cart at the moment they were added. Later
/// catalog edits do not reach these copies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Product>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutAck {
    pub message: &'static str,
    pub item_count: usize,
    pub total: f64,
}

impl Cart {
    pub fn add(&mut self, product: &Product) {
        self.items.push(product.clone());
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|p| p.price).sum()
    }

    /// No payment happens; the cart is left as it is.
    pub fn checkout(&self) -> CheckoutAck {
        CheckoutAck {
            message: "Checkout complete!",
            item_count: self.len(),
            total: self.total(),
        }
    }
}
