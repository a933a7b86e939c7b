//! Domain layer for the stock tracker.
//!
//! This crate provides the bookkeeping services over a [`StockStore`]:
//! - Commands carrying validated user input
//! - `ProductCatalog` for product CRUD
//! - `OrderLedger` for placing and looking up orders
//! - Order code generation

pub mod catalog;
pub mod codes;
pub mod command;
pub mod error;
pub mod ledger;

pub use catalog::ProductCatalog;
pub use codes::{CodeGenerator, RandomCodeGenerator};
pub use command::{
    AddProduct, Command, CreateOrder, DeleteProduct, Field, LookupOrder, UpdateStock,
};
pub use error::{DomainError, LookupError, ValidationError};
pub use ledger::{DEFAULT_CODE_ATTEMPTS, OrderLedger};
pub use stock_store::{Order, OrderCode, PlacedOrder, Product, StockStore};
