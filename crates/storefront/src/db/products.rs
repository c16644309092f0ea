//! Product repository for stock queries.
//!
//! Queries are bound at runtime (`query`/`query_as`) so the crate builds
//! without a reachable database.

use sqlx::PgPool;

use pulse_gear_core::Product;

use super::RepositoryError;

/// Outcome of a conditional stock decrement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StockDecrement {
    /// Stock was sufficient and has been reduced.
    Applied,
    /// No product row matches the name. Nothing was mutated.
    NotFound,
    /// The product exists but holds fewer units than requested.
    /// Nothing was mutated.
    Insufficient,
}

/// Row shape for the product listing query.
#[derive(sqlx::FromRow)]
struct ProductRow {
    name: String,
    stock: i32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            name: row.name,
            stock: row.stock,
        }
    }
}

/// Repository for product stock operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all products with their current stock, in natural storage
    /// order. Read-only.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductRow>("SELECT name, stock FROM product")
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    /// Atomically take `quantity` units of `name` out of stock.
    ///
    /// The sufficiency check and the decrement are one conditional
    /// `UPDATE`; the affected-row count decides success. Two concurrent
    /// purchases of the last units can therefore never both succeed, and
    /// stock never goes negative (the schema enforces `stock >= 0` as
    /// well). Only when no row was affected does a follow-up existence
    /// check distinguish an unknown product from insufficient stock.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn decrement_stock(
        &self,
        name: &str,
        quantity: i32,
    ) -> Result<StockDecrement, RepositoryError> {
        let result = sqlx::query(
            "UPDATE product SET stock = stock - $2, updated_at = now() \
             WHERE name = $1 AND stock >= $2",
        )
        .bind(name)
        .bind(quantity)
        .execute(self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(StockDecrement::Applied);
        }

        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM product WHERE name = $1)")
                .bind(name)
                .fetch_one(self.pool)
                .await?;

        if exists {
            Ok(StockDecrement::Insufficient)
        } else {
            Ok(StockDecrement::NotFound)
        }
    }

    /// Insert a product, or reset its stock if it already exists.
    ///
    /// Used by the seed command only.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn upsert(&self, name: &str, stock: i32) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO product (name, stock) VALUES ($1, $2) \
             ON CONFLICT (name) DO UPDATE SET stock = EXCLUDED.stock, updated_at = now()",
        )
        .bind(name)
        .bind(stock)
        .execute(self.pool)
        .await?;
        Ok(())
    }
}
