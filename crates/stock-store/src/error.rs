use thiserror::Error;

/// Errors that can occur when interacting with the stock store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product row carries the given name.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Decrementing the stock of a product would leave the `i64` range.
    #[error("Stock of {name} would overflow")]
    StockOverflow { name: String },

    /// A stored row could not be mapped back into a model.
    #[error("Corrupt {table} row {id}: {reason}")]
    CorruptRow {
        table: &'static str,
        id: i64,
        reason: String,
    },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Result type for stock store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
