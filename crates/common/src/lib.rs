//! Shared value types for the stock tracker crates.

pub mod types;

pub use types::{InvalidOrderCode, ORDER_CODE_ALPHABET, ORDER_CODE_LEN, OrderCode};
