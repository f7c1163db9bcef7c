use crate::{
    dto::products::ProductList,
    error::{AppError, AppResult},
    models::NewProduct,
    response::Ack,
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<ProductList> {
    state.catalog.ensure_schema().await?;
    let items = state.catalog.list_all().await?;
    Ok(ProductList { items })
}

pub async fn add_product(state: &AppState, payload: NewProduct) -> AppResult<Ack> {
    validate_new_product(&payload)?;
    state.catalog.ensure_schema().await?;
    state.catalog.insert(&payload).await?;

    tracing::info!(
        namespace = %state.catalog.namespace(),
        name = %payload.name,
        category = %payload.category,
        "product added"
    );
    Ok(Ack::ok())
}

/// Deleting an id that does not exist still acknowledges success.
pub async fn delete_product(state: &AppState, id: i64) -> AppResult<Ack> {
    state.catalog.ensure_schema().await?;
    let removed = state.catalog.delete_by_id(id).await?;

    tracing::info!(
        namespace = %state.catalog.namespace(),
        id,
        removed,
        "product deleted"
    );
    Ok(Ack::ok())
}

pub fn validate_new_product(payload: &NewProduct) -> AppResult<()> {
    if payload.name.trim().is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    if !payload.price.is_finite() || payload.price < 0.0 {
        return Err(AppError::BadRequest(
            "price must be a non-negative number".to_string(),
        ));
    }
    if payload.stock_quantity < 0 {
        return Err(AppError::BadRequest(
            "stockQuantity must not be negative".to_string(),
        ));
    }
    if payload.image_url.trim().is_empty() {
        return Err(AppError::BadRequest("imageUrl must not be empty".to_string()));
    }
    Ok(())
}
