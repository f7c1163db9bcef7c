use sqlx::FromRow;

use crate::{
    db::DbPool,
    error::{AppError, AppResult},
    models::{Category, NewProduct, Product},
    namespace::Namespace,
};

#[derive(FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
    category: String,
    #[sqlx(rename = "imageUrl")]
    image_url: String,
    #[sqlx(rename = "stockQuantity")]
    stock_quantity: i64,
}

/// The product table of one deployment, `<namespace>_products`.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    pool: DbPool,
    namespace: Namespace,
    table: String,
}

impl CatalogStore {
    pub fn new(pool: DbPool, namespace: Namespace) -> Self {
        let table = namespace.table("products");
        Self {
            pool,
            namespace,
            table,
        }
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Create the table if it does not exist yet. Cheap enough to run per request.
    pub async fn ensure_schema(&self) -> AppResult<()> {
        let sql = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                price REAL NOT NULL,
                category TEXT NOT NULL,
                imageUrl TEXT NOT NULL,
                stockQuantity INTEGER NOT NULL
            )
            "#,
            self.table
        );
        sqlx::query(&sql).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn list_all(&self) -> AppResult<Vec<Product>> {
        let sql = format!(
            "SELECT id, name, description, price, category, imageUrl, stockQuantity FROM {} ORDER BY id ASC",
            self.table
        );
        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(table = %self.table, rows = rows.len(), "listed products");
        rows.into_iter().map(product_from_row).collect()
    }

    /// Persist a new product. The assigned id is not returned; list to observe it.
    pub async fn insert(&self, product: &NewProduct) -> AppResult<()> {
        let sql = format!(
            r#"
            INSERT INTO {}
            (name, description, price, category, imageUrl, stockQuantity)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
            self.table
        );
        let result = sqlx::query(&sql)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.category.as_str())
            .bind(&product.image_url)
            .bind(product.stock_quantity)
            .execute(&self.pool)
            .await?;

        tracing::debug!(
            table = %self.table,
            id = result.last_insert_rowid(),
            "inserted product"
        );
        Ok(())
    }

    /// Remove the product with `id`, if any. Returns the number of rows removed (0 or 1).
    pub async fn delete_by_id(&self, id: i64) -> AppResult<u64> {
        let sql = format!("DELETE FROM {} WHERE id = ?", self.table);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;

        tracing::debug!(
            table = %self.table,
            id,
            rows_affected = result.rows_affected(),
            "deleted product"
        );
        Ok(result.rows_affected())
    }
}

fn product_from_row(row: ProductRow) -> AppResult<Product> {
    let category = row
        .category
        .parse::<Category>()
        .map_err(|err| AppError::Internal(anyhow::anyhow!("product {}: {err}", row.id)))?;
    Ok(Product {
        id: row.id,
        name: row.name,
        description: row.description,
        price: row.price,
        category,
        image_url: row.image_url,
        stock_quantity: row.stock_quantity,
    })
}
