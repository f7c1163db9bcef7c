use joalda_storefront::{
    catalog::CatalogStore,
    config::AppConfig,
    db::create_pool,
    models::{Category, NewProduct},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    let catalog = CatalogStore::new(pool, config.namespace);
    catalog.ensure_schema().await?;

    if !catalog.list_all().await?.is_empty() {
        println!("{} already has products, skipping seed", catalog.table());
        return Ok(());
    }

    seed_products(&catalog).await?;
    println!("Seeded {}", catalog.table());
    Ok(())
}

async fn seed_products(catalog: &CatalogStore) -> anyhow::Result<()> {
    let products = vec![
        (
            "Adire Indigo Shirt",
            "Hand-dyed indigo adire, relaxed fit",
            18500.0,
            Category::Cultural,
            "https://images.example.com/adire-indigo.jpg",
            12,
        ),
        (
            "Ankara Print Shirt",
            "Bold wax print with mandarin collar",
            15000.0,
            Category::Cultural,
            "https://images.example.com/ankara.jpg",
            8,
        ),
        (
            "Classic Oxford Shirt",
            "White oxford cotton, button-down collar",
            9500.0,
            Category::Standard,
            "https://images.example.com/oxford.jpg",
            30,
        ),
        (
            "Linen Summer Shirt",
            "Breathable linen in sand",
            11000.0,
            Category::Standard,
            "https://images.example.com/linen.jpg",
            0,
        ),
    ];

    for (name, description, price, category, image_url, stock_quantity) in products {
        catalog
            .insert(&NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                price,
                category,
                image_url: image_url.to_string(),
                stock_quantity,
            })
            .await?;
        println!("Seeded {name}");
    }

    Ok(())
}
