pub mod error;
pub mod memory;
pub mod model;
pub mod sqlite;
pub mod store;

pub use common::OrderCode;
pub use error::{Result, StoreError};
pub use memory::InMemoryStockStore;
pub use model::{NewOrder, NewProduct, Order, PlacedOrder, Product};
pub use sqlite::SqliteStockStore;
pub use store::{StockStore, StockStoreExt};
