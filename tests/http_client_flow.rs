use joalda_storefront::{
    catalog::CatalogStore,
    client::{ActionKind, ClientError, HttpCatalogApi, Storefront, View},
    db::create_memory_pool,
    models::{Category, NewProduct},
    namespace::Namespace,
    routes::create_app,
    state::AppState,
};
use reqwest::StatusCode;

// Serve the app on an ephemeral port and return its base URL.
async fn spawn_server() -> String {
    let pool = create_memory_pool().await.unwrap();
    let catalog = CatalogStore::new(pool, Namespace::parse("http_flow").unwrap());
    let app = create_app(AppState { catalog });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/")
}

fn shirt(name: &str) -> NewProduct {
    NewProduct {
        name: name.into(),
        description: "Hand-dyed indigo".into(),
        price: 18500.0,
        category: Category::Cultural,
        image_url: "https://img.example/adire.jpg".into(),
        stock_quantity: 3,
    }
}

#[tokio::test]
async fn storefront_drives_the_service_over_http() {
    let base_url = spawn_server().await;
    let mut store = Storefront::open(HttpCatalogApi::new(base_url))
        .await
        .unwrap();
    assert!(store.model().products.is_empty());

    store.go_add_product();
    store.request_add(shirt("Adire Shirt"));
    assert_eq!(store.submit_passphrase("2024").await.unwrap(), ActionKind::Add);
    assert_eq!(store.model().view, View::Home);

    let products = store.model().products.clone();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, 1);
    assert_eq!(products[0].name, "Adire Shirt");
    assert_eq!(products[0].category, Category::Cultural);

    store.request_delete(products[0].id);
    assert_eq!(
        store.submit_passphrase("2024").await.unwrap(),
        ActionKind::Delete
    );
    assert!(store.model().products.is_empty());

    store.go_add_product();
    store.request_add(shirt("   "));
    match store.submit_passphrase("2024").await {
        Err(ClientError::Rejected { status, message }) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(message.contains("name must not be empty"), "{message}");
        }
        other => panic!("expected a rejected add, got {other:?}"),
    }
    assert!(!store.model().gate.is_open());
    assert_eq!(store.model().view, View::AddProduct);
    assert!(store.model().products.is_empty());
}
