use sqlx::PgPool;

use crate::{
    error::Result,
    models::{NewProduct, Product, UpdateProductRequest},
};

/// All products, most recently created first.
pub async fn list_products(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, description, stock FROM products ORDER BY id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &PgPool, id: i64) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, price, description, stock FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn create_product(pool: &PgPool, new: NewProduct) -> Result<Product> {
    let product = sqlx::query_as::<_, Product>(
        "INSERT INTO products (name, price, description, stock)
         VALUES ($1, $2, $3, $4)
         RETURNING id, name, price, description, stock",
    )
    .bind(&new.name)
    .bind(new.price)
    .bind(&new.description)
    .bind(new.stock)
    .fetch_one(pool)
    .await?;

    Ok(product)
}

/// Overwrites every column of the row. Fields missing from the request are
/// stored as NULL, so omitting `name` or `price` fails the NOT NULL constraint.
pub async fn update_product(
    pool: &PgPool,
    id: i64,
    req: UpdateProductRequest,
) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "UPDATE products
         SET name = $1, price = $2, description = $3, stock = $4
         WHERE id = $5
         RETURNING id, name, price, description, stock",
    )
    .bind(req.name)
    .bind(req.price)
    .bind(req.description)
    .bind(req.stock)
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete_product(pool: &PgPool, id: i64) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
