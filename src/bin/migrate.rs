use joalda_storefront::{catalog::CatalogStore, config::AppConfig, db::create_pool};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url).await?;
    let catalog = CatalogStore::new(pool, config.namespace);
    catalog.ensure_schema().await?;
    println!("Schema ready: {}", catalog.table());
    Ok(())
}
