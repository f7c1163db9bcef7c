use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use joalda_storefront::{
    catalog::CatalogStore,
    db::{DbPool, create_memory_pool},
    models::{Category, NewProduct, Product},
    namespace::Namespace,
    routes::create_app,
    state::AppState,
};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app_for(pool: &DbPool, namespace: &str) -> Router {
    let catalog = CatalogStore::new(pool.clone(), Namespace::parse(namespace).unwrap());
    create_app(AppState { catalog })
}

async fn app() -> Router {
    let pool = create_memory_pool().await.unwrap();
    app_for(&pool, "test")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>, Option<String>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec(), content_type)
}

async fn list(app: &Router) -> Vec<Product> {
    let request = Request::get("/products").body(Body::empty()).unwrap();
    let (status, body, _) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

async fn add(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::post("/add-product")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, body, _) = send(app, request).await;
    (status, serde_json::from_slice(&body).unwrap())
}

async fn delete(app: &Router, id: &str) -> (StatusCode, Vec<u8>, Option<String>) {
    let request = Request::delete(format!("/delete-product/{id}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

fn cultural_shirt() -> Value {
    json!({
        "name": "Adire Shirt",
        "description": "Hand-dyed indigo",
        "price": 18500.0,
        "category": "cultural",
        "imageUrl": "https://img.example/adire.jpg",
        "stockQuantity": 4
    })
}

#[tokio::test]
async fn fresh_store_lists_empty_array() {
    let app = app().await;
    let request = Request::get("/products").body(Body::empty()).unwrap();
    let (status, body, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_slice::<Value>(&body).unwrap(), json!([]));
}

#[tokio::test]
async fn insert_then_list_returns_the_record_with_a_new_id() {
    let app = app().await;

    let (status, body) = add(&app, cultural_shirt()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true }));

    let products = list(&app).await;
    assert_eq!(products.len(), 1);
    let first = &products[0];
    assert!(first.id > 0);
    let expected: NewProduct = serde_json::from_value(cultural_shirt()).unwrap();
    assert_eq!(first.name, expected.name);
    assert_eq!(first.description, expected.description);
    assert_eq!(first.price, expected.price);
    assert_eq!(first.category, Category::Cultural);
    assert_eq!(first.image_url, expected.image_url);
    assert_eq!(first.stock_quantity, expected.stock_quantity);

    add(&app, cultural_shirt()).await;
    let products = list(&app).await;
    assert_eq!(products.len(), 2);
    assert!(products[1].id > first.id);
}

#[tokio::test]
async fn delete_is_idempotent() {
    let app = app().await;
    add(&app, cultural_shirt()).await;
    let id = list(&app).await[0].id.to_string();

    for _ in 0..2 {
        let (status, body, _) = delete(&app, &id).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            serde_json::from_slice::<Value>(&body).unwrap(),
            json!({ "success": true })
        );
        assert!(list(&app).await.is_empty());
    }
}

#[tokio::test]
async fn non_numeric_delete_falls_through_to_shell() {
    let app = app().await;
    add(&app, cultural_shirt()).await;

    let id = list(&app).await[0].id;
    assert_eq!(id, 1);

    // `%31` decodes to "1" but the raw segment is not digits.
    for raw in ["abc", "%31", "%FF", "1%20"] {
        let (status, body, content_type) = delete(&app, raw).await;
        assert_eq!(status, StatusCode::OK, "{raw}");
        assert!(content_type.unwrap().starts_with("text/html"), "{raw}");
        assert!(String::from_utf8(body).unwrap().contains("Joalda Fashion"));
        assert_eq!(list(&app).await.len(), 1, "{raw}");
    }
}

#[tokio::test]
async fn overflowing_id_is_a_bad_request() {
    let app = app().await;
    let (status, body, _) = delete(&app, "99999999999999999999999").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn unmatched_paths_and_methods_serve_the_shell() {
    let app = app().await;
    for request in [
        Request::get("/").body(Body::empty()).unwrap(),
        Request::get("/nowhere/at/all").body(Body::empty()).unwrap(),
        Request::post("/products").body(Body::empty()).unwrap(),
        Request::get("/delete-product/3").body(Body::empty()).unwrap(),
    ] {
        let (status, body, content_type) = send(&app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.unwrap().starts_with("text/html"));
        assert!(String::from_utf8(body).unwrap().contains("<div id=\"root\">"));
    }
}

#[tokio::test]
async fn invalid_products_are_rejected_without_storing() {
    let app = app().await;

    let mut negative = cultural_shirt();
    negative["price"] = json!(-5);
    let (status, body) = add(&app, negative).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);

    let mut blank = cultural_shirt();
    blank["name"] = json!("  ");
    assert_eq!(add(&app, blank).await.0, StatusCode::BAD_REQUEST);

    let mut missing = cultural_shirt();
    missing.as_object_mut().unwrap().remove("imageUrl");
    assert_eq!(add(&app, missing).await.0, StatusCode::BAD_REQUEST);

    let mut wrong_type = cultural_shirt();
    wrong_type["stockQuantity"] = json!("lots");
    assert_eq!(add(&app, wrong_type).await.0, StatusCode::BAD_REQUEST);

    let request = Request::post("/add-product")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    assert_eq!(send(&app, request).await.0, StatusCode::BAD_REQUEST);

    assert!(list(&app).await.is_empty());
}

#[tokio::test]
async fn namespaces_sharing_a_store_are_isolated() {
    let pool = create_memory_pool().await.unwrap();
    let north = app_for(&pool, "north");
    let south = app_for(&pool, "south");

    add(&north, cultural_shirt()).await;
    let mut standard = cultural_shirt();
    standard["category"] = json!("standard");
    standard["name"] = json!("Oxford");
    add(&south, standard.clone()).await;
    add(&south, standard).await;

    let north_products = list(&north).await;
    let south_products = list(&south).await;
    assert_eq!(north_products.len(), 1);
    assert_eq!(north_products[0].name, "Adire Shirt");
    assert_eq!(south_products.len(), 2);
    assert!(south_products.iter().all(|p| p.name == "Oxford"));

    let id = north_products[0].id.to_string();
    delete(&south, &id).await;
    assert_eq!(list(&north).await.len(), 1);
}
