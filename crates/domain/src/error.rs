//! Domain error types.

use stock_store::StoreError;
use thiserror::Error;

use crate::command::Field;

/// Malformed user input, rejected before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty or only whitespace.
    #[error("{field} must not be empty")]
    EmptyField { field: Field },

    /// A quantity field did not hold a whole number.
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: Field, value: String },

    /// A quantity was a number but outside the allowed range.
    #[error("{field} {rule}, got {value}")]
    OutOfRange {
        field: Field,
        value: i64,
        rule: &'static str,
    },
}

/// A referenced entity does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// An order named a product that has no row in the catalog.
    #[error("No product named '{name}'")]
    ProductNotFound { name: String },
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The input failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A referenced product does not exist.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Every generated order code was already taken.
    #[error("No unused order code found after {attempts} attempts")]
    CodeSpaceExhausted { attempts: u32 },

    /// The order would push the product's stock past the lowest storable value.
    #[error("Stock of '{name}' cannot go any lower")]
    StockOverflow { name: String },

    /// An error occurred in the stock store.
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ProductNotFound(name) => {
                DomainError::Lookup(LookupError::ProductNotFound { name })
            }
            StoreError::StockOverflow { name } => DomainError::StockOverflow { name },
            other => DomainError::Store(other),
        }
    }
}
