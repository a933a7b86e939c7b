//! Product catalog service.

use stock_store::{NewProduct, Product, StockStore};

use crate::command::{AddProduct, Command, DeleteProduct, UpdateStock};
use crate::error::DomainError;

/// Service for managing the product catalog.
///
/// Products are keyed by name only. Names are not unique: adding a name twice
/// creates two rows, and update/delete act on every row with the name.
pub struct ProductCatalog<S: StockStore> {
    store: S,
}

impl<S: StockStore> ProductCatalog<S> {
    /// Creates a new product catalog over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Adds a product row. Never checks for an existing product.
    #[tracing::instrument(skip(self))]
    pub async fn add_product(&self, cmd: AddProduct) -> Result<Product, DomainError> {
        cmd.validate()?;

        let product = self
            .store
            .insert_product(NewProduct::new(cmd.name, cmd.stock_quantity))
            .await?;

        metrics::counter!("products_added_total").increment(1);
        tracing::info!(
            product_id = product.id,
            name = %product.name,
            stock = product.stock_quantity,
            "product added"
        );
        Ok(product)
    }

    /// Lists every product in storage order.
    pub async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.store.list_products().await?)
    }

    /// Overwrites the stock of every product with the command's name.
    ///
    /// Returns the number of rows changed. An unknown name is not an error.
    #[tracing::instrument(skip(self))]
    pub async fn update_stock(&self, cmd: UpdateStock) -> Result<u64, DomainError> {
        cmd.validate()?;

        let changed = self.store.set_stock(&cmd.name, cmd.stock_quantity).await?;
        if changed == 0 {
            tracing::warn!(name = %cmd.name, "stock update matched no product");
        } else {
            tracing::info!(name = %cmd.name, stock = cmd.stock_quantity, rows = changed, "stock updated");
        }
        Ok(changed)
    }

    /// Removes every product with the command's name.
    ///
    /// Returns the number of rows removed. An unknown name is not an error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_product(&self, cmd: DeleteProduct) -> Result<u64, DomainError> {
        cmd.validate()?;

        let removed = self.store.delete_products(&cmd.name).await?;
        if removed == 0 {
            tracing::warn!(name = %cmd.name, "delete matched no product");
        } else {
            tracing::info!(name = %cmd.name, rows = removed, "product deleted");
        }
        Ok(removed)
    }
}
