use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::{
    Row,
    sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow},
};

use crate::{
    NewOrder, NewProduct, Order, OrderCode, PlacedOrder, Product, Result, StoreError,
    store::StockStore,
};

/// SQLite-backed stock store implementation.
///
/// Holds a single long-lived connection; the store assumes one writer.
#[derive(Clone)]
pub struct SqliteStockStore {
    pool: SqlitePool,
}

impl SqliteStockStore {
    /// Creates a new SQLite stock store over an existing pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database at `url` and runs migrations.
    pub async fn connect(url: &str) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = Self::pool_options().connect_with(options).await?;

        let store = Self::new(pool);
        store.run_migrations().await?;
        tracing::debug!(%url, "stock store ready");
        Ok(store)
    }

    /// Opens a private in-memory database with the schema applied.
    pub async fn in_memory() -> Result<Self> {
        Self::connect("sqlite::memory:").await
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    // One connection that never expires, so in-memory databases survive.
    fn pool_options() -> SqlitePoolOptions {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
    }

    fn row_to_product(row: SqliteRow) -> Result<Product> {
        Ok(Product {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            stock_quantity: row.try_get("stock_quantity")?,
        })
    }

    fn row_to_order(row: SqliteRow) -> Result<Order> {
        let id: i64 = row.try_get("id")?;
        let raw_code: String = row.try_get("order_number")?;
        let order_number = OrderCode::parse(&raw_code).map_err(|e| StoreError::CorruptRow {
            table: "orders",
            id,
            reason: e.to_string(),
        })?;

        Ok(Order {
            id,
            product_name: row.try_get("product_name")?,
            quantity: row.try_get("quantity")?,
            order_number,
        })
    }
}

#[async_trait]
impl StockStore for SqliteStockStore {
    async fn insert_product(&self, product: NewProduct) -> Result<Product> {
        let id = sqlx::query("INSERT INTO products (name, stock_quantity) VALUES (?, ?)")
            .bind(&product.name)
            .bind(product.stock_quantity)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        Ok(Product {
            id,
            name: product.name,
            stock_quantity: product.stock_quantity,
        })
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, stock_quantity FROM products ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Self::row_to_product).collect()
    }

    async fn set_stock(&self, name: &str, stock_quantity: i64) -> Result<u64> {
        let result = sqlx::query("UPDATE products SET stock_quantity = ? WHERE name = ?")
            .bind(stock_quantity)
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_products(&self, name: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM products WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn stock_of(&self, name: &str) -> Result<Option<i64>> {
        let stock: Option<i64> = sqlx::query_scalar(
            "SELECT stock_quantity FROM products WHERE name = ? ORDER BY id ASC LIMIT 1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(stock)
    }

    async fn place_order(&self, order: NewOrder) -> Result<PlacedOrder> {
        // Dropping the transaction on an early return rolls it back.
        let mut tx = self.pool.begin().await?;

        let order_id = sqlx::query(
            "INSERT INTO orders (product_name, quantity, order_number) VALUES (?, ?, ?)",
        )
        .bind(&order.product_name)
        .bind(order.quantity)
        .bind(order.order_number.as_str())
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let current: Option<i64> = sqlx::query_scalar(
            "SELECT stock_quantity FROM products WHERE name = ? ORDER BY id ASC LIMIT 1",
        )
        .bind(&order.product_name)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(current) = current else {
            return Err(StoreError::ProductNotFound(order.product_name));
        };
        let Some(remaining_stock) = current.checked_sub(order.quantity) else {
            return Err(StoreError::StockOverflow {
                name: order.product_name,
            });
        };

        sqlx::query("UPDATE products SET stock_quantity = ? WHERE name = ?")
            .bind(remaining_stock)
            .bind(&order.product_name)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(PlacedOrder {
            order: Order {
                id: order_id,
                product_name: order.product_name,
                quantity: order.quantity,
                order_number: order.order_number,
            },
            remaining_stock,
        })
    }

    async fn find_order(&self, code: &OrderCode) -> Result<Option<Order>> {
        let row: Option<SqliteRow> = sqlx::query(
            r#"
            SELECT id, product_name, quantity, order_number
            FROM orders
            WHERE order_number = ?
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_order).transpose()
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        let rows = sqlx::query(
            "SELECT id, product_name, quantity, order_number FROM orders ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_order).collect()
    }
}
