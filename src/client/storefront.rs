use serde::{Deserialize, Serialize};

use crate::models::{NewProduct, Product};

use super::{
    api::{CatalogApi, ClientError},
    cart::{Cart, CheckoutAck},
    filter::CatalogFilter,
    gate::{ActionKind, Gate, PendingAction},
    view::View,
};

pub const ADDED_NOTICE: &str = "Product added successfully!";
pub const DELETED_NOTICE: &str = "Product deleted successfully!";

/// Everything one session shows on screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub view: View,
    /// Last full catalog fetched from the service.
    pub products: Vec<Product>,
    pub filter: CatalogFilter,
    pub cart: Cart,
    pub gate: Gate,
    /// Message from the last completed mutation.
    pub notice: Option<String>,
}

pub struct Storefront<A> {
    api: A,
    model: ViewModel,
}

impl<A: CatalogApi> Storefront<A> {
    pub fn new(api: A) -> Self {
        Self::with_model(api, ViewModel::default())
    }

    pub fn with_model(api: A, model: ViewModel) -> Self {
        Self { api, model }
    }

    /// Create a session and load the catalog.
    pub async fn open(api: A) -> Result<Self, ClientError> {
        let mut storefront = Self::new(api);
        storefront.refresh().await?;
        Ok(storefront)
    }

    pub fn model(&self) -> &ViewModel {
        &self.model
    }

    pub fn into_model(self) -> ViewModel {
        self.model
    }

    /// Replace the snapshot with a fresh copy of the whole catalog.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        self.model.products = self.api.list_products().await?;
        tracing::debug!(products = self.model.products.len(), "catalog refreshed");
        Ok(())
    }

    pub fn visible_products(&self) -> Vec<&Product> {
        self.model.filter.apply(&self.model.products)
    }

    pub fn filter_mut(&mut self) -> &mut CatalogFilter {
        &mut self.model.filter
    }

    pub fn set_filter(&mut self, filter: CatalogFilter) {
        self.model.filter = filter;
    }

    pub fn navigate(&mut self, view: View) {
        self.model.view = view;
    }

    pub fn go_home(&mut self) {
        self.navigate(View::Home);
    }

    pub fn go_cart(&mut self) {
        self.navigate(View::Cart);
    }

    pub fn go_add_product(&mut self) {
        self.navigate(View::AddProduct);
    }

    pub fn show_product(&mut self, product: &Product) {
        self.navigate(View::ProductDetail(product.clone()));
    }

    pub fn add_to_cart(&mut self, product: &Product) {
        self.model.cart.add(product);
    }

    pub fn cart_label(&self) -> String {
        format!("Cart ({})", self.model.cart.len())
    }

    pub fn checkout(&self) -> CheckoutAck {
        self.model.cart.checkout()
    }

    /// Queue an insert behind the gate.
    pub fn request_add(&mut self, product: NewProduct) {
        self.model.gate.request(PendingAction::Add(product));
    }

    /// Queue a delete behind the gate.
    pub fn request_delete(&mut self, id: i64) {
        self.model.gate.request(PendingAction::Delete(id));
    }

    pub fn cancel_pending(&mut self) -> Option<PendingAction> {
        self.model.gate.cancel()
    }

    /// Answer the gate. On a match the pending action is sent, the catalog is
    /// re-fetched and the session returns home. A wrong answer leaves the
    /// action queued and returns [`GateError::Mismatch`](super::GateError::Mismatch).
    pub async fn submit_passphrase(&mut self, answer: &str) -> Result<ActionKind, ClientError> {
        let action = self.model.gate.submit(answer)?;
        let kind = action.kind();

        match action {
            PendingAction::Add(product) => {
                self.api.add_product(&product).await?;
                self.model.notice = Some(ADDED_NOTICE.to_string());
            }
            PendingAction::Delete(id) => {
                self.api.delete_product(id).await?;
                self.model.notice = Some(DELETED_NOTICE.to_string());
            }
        }

        self.refresh().await?;
        self.go_home();
        Ok(kind)
    }
}
