use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    NewOrder, NewProduct, Order, OrderCode, PlacedOrder, Product, Result, StoreError,
    store::StockStore,
};

#[derive(Debug, Default)]
struct InMemoryState {
    products: Vec<Product>,
    orders: Vec<Order>,
    next_product_id: i64,
    next_order_id: i64,
}

/// In-memory stock store implementation for testing.
///
/// This implementation keeps both tables in memory and provides
/// the same interface as the SQLite implementation.
#[derive(Clone, Default)]
pub struct InMemoryStockStore {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryStockStore {
    /// Creates a new empty in-memory stock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total number of orders stored.
    pub async fn order_count(&self) -> usize {
        self.state.read().await.orders.len()
    }

    /// Clears all products and orders.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.products.clear();
        state.orders.clear();
    }
}

#[async_trait]
impl StockStore for InMemoryStockStore {
    async fn insert_product(&self, product: NewProduct) -> Result<Product> {
        let mut state = self.state.write().await;
        state.next_product_id += 1;

        let product = Product {
            id: state.next_product_id,
            name: product.name,
            stock_quantity: product.stock_quantity,
        };
        state.products.push(product.clone());
        Ok(product)
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.state.read().await.products.clone())
    }

    async fn set_stock(&self, name: &str, stock_quantity: i64) -> Result<u64> {
        let mut state = self.state.write().await;
        let mut changed = 0;
        for product in state.products.iter_mut().filter(|p| p.name == name) {
            product.stock_quantity = stock_quantity;
            changed += 1;
        }
        Ok(changed)
    }

    async fn delete_products(&self, name: &str) -> Result<u64> {
        let mut state = self.state.write().await;
        let before = state.products.len();
        state.products.retain(|p| p.name != name);
        Ok((before - state.products.len()) as u64)
    }

    async fn stock_of(&self, name: &str) -> Result<Option<i64>> {
        let state = self.state.read().await;
        Ok(state
            .products
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.stock_quantity))
    }

    async fn place_order(&self, order: NewOrder) -> Result<PlacedOrder> {
        // Holding the write lock for the whole call makes it atomic.
        let mut state = self.state.write().await;

        let Some(current) = state
            .products
            .iter()
            .find(|p| p.name == order.product_name)
            .map(|p| p.stock_quantity)
        else {
            return Err(StoreError::ProductNotFound(order.product_name));
        };
        let Some(remaining_stock) = current.checked_sub(order.quantity) else {
            return Err(StoreError::StockOverflow {
                name: order.product_name,
            });
        };

        state.next_order_id += 1;
        let order = Order {
            id: state.next_order_id,
            product_name: order.product_name,
            quantity: order.quantity,
            order_number: order.order_number,
        };
        state.orders.push(order.clone());

        for product in state
            .products
            .iter_mut()
            .filter(|p| p.name == order.product_name)
        {
            product.stock_quantity = remaining_stock;
        }

        Ok(PlacedOrder {
            order,
            remaining_stock,
        })
    }

    async fn find_order(&self, code: &OrderCode) -> Result<Option<Order>> {
        let state = self.state.read().await;
        Ok(state
            .orders
            .iter()
            .find(|o| o.order_number == *code)
            .cloned())
    }

    async fn list_orders(&self) -> Result<Vec<Order>> {
        Ok(self.state.read().await.orders.clone())
    }
}
