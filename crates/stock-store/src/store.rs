use async_trait::async_trait;

use crate::{NewOrder, NewProduct, Order, OrderCode, PlacedOrder, Product, Result};

/// Core trait for stock store implementations.
///
/// A stock store persists the product catalog and the order log. Products are
/// addressed by name, and a name may match several rows; every name-keyed
/// operation applies to all of them. Each call is committed before it returns.
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Inserts a product row. Existing rows with the same name are left alone.
    async fn insert_product(&self, product: NewProduct) -> Result<Product>;

    /// Retrieves every product in storage order (oldest first).
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Overwrites the stock quantity of every product called `name`.
    ///
    /// Returns the number of rows changed; zero when no such product exists.
    async fn set_stock(&self, name: &str, stock_quantity: i64) -> Result<u64>;

    /// Removes every product called `name`.
    ///
    /// Returns the number of rows removed; zero when no such product exists.
    async fn delete_products(&self, name: &str) -> Result<u64>;

    /// Gets the stock of the first product called `name`.
    ///
    /// Returns None if the product doesn't exist.
    async fn stock_of(&self, name: &str) -> Result<Option<i64>>;

    /// Records an order and decrements stock for its product.
    ///
    /// The order insert and the stock write happen atomically - either both
    /// persist or neither does. The new stock is the first matching product's
    /// stock minus the order quantity, written to every row with that name.
    /// No floor is applied. Fails with `ProductNotFound` when no product
    /// carries the order's product name.
    async fn place_order(&self, order: NewOrder) -> Result<PlacedOrder>;

    /// Retrieves the first order (lowest id) carrying `code`.
    async fn find_order(&self, code: &OrderCode) -> Result<Option<Order>>;

    /// Retrieves every order in storage order.
    async fn list_orders(&self) -> Result<Vec<Order>>;
}

/// Extension trait providing convenience methods for stock stores.
#[async_trait]
pub trait StockStoreExt: StockStore {
    /// Checks if any order already carries `code`.
    async fn order_code_exists(&self, code: &OrderCode) -> Result<bool> {
        Ok(self.find_order(code).await?.is_some())
    }

    /// Checks if at least one product is called `name`.
    async fn product_exists(&self, name: &str) -> Result<bool> {
        Ok(self.stock_of(name).await?.is_some())
    }
}

// Blanket implementation for all StockStore implementations
impl<T: StockStore + ?Sized> StockStoreExt for T {}
