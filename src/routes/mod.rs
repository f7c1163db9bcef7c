use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

pub mod doc;
pub mod health;
pub mod products;
pub mod shell;

// Paths that do not match, or match with the wrong method, get the UI shell.
pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(products::list_products).fallback(shell::index),
        )
        .route(
            "/add-product",
            post(products::add_product).fallback(shell::index),
        )
        .route(
            "/delete-product/{id}",
            delete(products::delete_product).fallback(shell::index),
        )
}

/// Full application router with state applied; middleware is layered by the binary.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(create_catalog_router())
        .merge(doc::scalar_docs())
        .fallback(shell::index)
        .with_state(state)
}
