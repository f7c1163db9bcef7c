use axum::{
    Json,
    extract::{OriginalUri, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::{
    dto::products::ProductList,
    error::{AppError, AppResult},
    models::{NewProduct, Product},
    response::{Ack, ErrorBody},
    routes::shell,
    services::product_service,
    state::AppState,
};

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Every product in the catalog, ordered by id", body = Vec<Product>),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<ProductList>> {
    let list = product_service::list_products(&state).await?;
    Ok(Json(list))
}

#[utoipa::path(
    post,
    path = "/add-product",
    request_body = NewProduct,
    responses(
        (status = 200, description = "Product stored; re-fetch /products to see its id", body = Ack),
        (status = 400, description = "Malformed or invalid product", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn add_product(
    State(state): State<AppState>,
    payload: Result<Json<NewProduct>, JsonRejection>,
) -> AppResult<Json<Ack>> {
    let Json(payload) = payload?;
    let ack = product_service::add_product(&state, payload).await?;
    Ok(Json(ack))
}

#[utoipa::path(
    delete,
    path = "/delete-product/{id}",
    params(
        ("id" = i64, Path, description = "Product ID, digits only")
    ),
    responses(
        (status = 200, description = "Deleted, or already absent", body = Ack),
        (status = 400, description = "Id out of range", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody),
    ),
    tag = "Products"
)]
pub async fn delete_product(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
) -> AppResult<Response> {
    // The id is read from the raw path, before percent-decoding; a segment that
    // is not made of ASCII digits addresses no route and gets the shell.
    let id = uri
        .path()
        .rsplit('/')
        .next()
        .unwrap_or_default();
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(shell::index().await.into_response());
    }
    let id = id
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("product id {id} is out of range")))?;

    let ack = product_service::delete_product(&state, id).await?;
    Ok(Json(ack).into_response())
}
