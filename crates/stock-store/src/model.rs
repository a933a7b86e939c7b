//! Rows of the product catalog and the order log.

use common::OrderCode;
use serde::{Deserialize, Serialize};

/// A product row as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Storage row id. Listing order follows it.
    pub id: i64,
    pub name: String,
    /// Units on hand. Orders may drive it below zero.
    pub stock_quantity: i64,
}

/// A product about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub stock_quantity: i64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, stock_quantity: i64) -> Self {
        Self {
            name: name.into(),
            stock_quantity,
        }
    }
}

/// An order row as stored. Orders are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Copied from the product at creation time; not a foreign key.
    pub product_name: String,
    pub quantity: i64,
    pub order_number: OrderCode,
}

/// An order about to be placed against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub product_name: String,
    pub quantity: i64,
    pub order_number: OrderCode,
}

impl NewOrder {
    pub fn new(product_name: impl Into<String>, quantity: i64, order_number: OrderCode) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
            order_number,
        }
    }
}

/// Outcome of placing an order: the new order row and the stock left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order: Order,
    pub remaining_stock: i64,
}
