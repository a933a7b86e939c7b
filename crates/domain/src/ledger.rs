//! Order ledger service.

use common::OrderCode;
use stock_store::{NewOrder, Order, PlacedOrder, StockStore, StockStoreExt};

use crate::codes::{CodeGenerator, RandomCodeGenerator};
use crate::command::{Command, CreateOrder, LookupOrder};
use crate::error::DomainError;

/// How many candidate codes `create_order` tries before giving up.
pub const DEFAULT_CODE_ATTEMPTS: u32 = 8;

/// Service for placing orders and looking them up by code.
pub struct OrderLedger<S: StockStore, G: CodeGenerator = RandomCodeGenerator> {
    store: S,
    codes: G,
    max_code_attempts: u32,
}

impl<S: StockStore> OrderLedger<S> {
    /// Creates a new ledger using random order codes.
    pub fn new(store: S) -> Self {
        Self::with_generator(store, RandomCodeGenerator)
    }
}

impl<S: StockStore, G: CodeGenerator> OrderLedger<S, G> {
    /// Creates a new ledger drawing codes from `codes`.
    pub fn with_generator(store: S, codes: G) -> Self {
        Self {
            store,
            codes,
            max_code_attempts: DEFAULT_CODE_ATTEMPTS,
        }
    }

    /// Sets how many codes to try before failing. At least one is always tried.
    pub fn with_max_code_attempts(mut self, attempts: u32) -> Self {
        self.max_code_attempts = attempts.max(1);
        self
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Places an order and decrements the product's stock.
    ///
    /// The order row and the stock decrement are committed together. Stock
    /// may go negative, down to `i64::MIN`; an order that would go further
    /// fails with [`DomainError::StockOverflow`]. Fails with a lookup error
    /// when the product does not exist. Nothing is recorded on failure.
    #[tracing::instrument(skip(self))]
    pub async fn create_order(&self, cmd: CreateOrder) -> Result<PlacedOrder, DomainError> {
        cmd.validate()?;

        let code = self.unused_code().await?;
        let placed = self
            .store
            .place_order(NewOrder::new(cmd.product_name, cmd.quantity, code))
            .await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(
            order_number = %placed.order.order_number,
            product = %placed.order.product_name,
            quantity = placed.order.quantity,
            remaining_stock = placed.remaining_stock,
            "order created"
        );
        if placed.remaining_stock < 0 {
            tracing::warn!(
                product = %placed.order.product_name,
                remaining_stock = placed.remaining_stock,
                "stock went negative"
            );
        }
        Ok(placed)
    }

    /// Finds the first order carrying the command's code.
    ///
    /// Returns None when no order matches, including when the text could
    /// never be a code.
    #[tracing::instrument(skip(self))]
    pub async fn get_order_by_number(&self, cmd: LookupOrder) -> Result<Option<Order>, DomainError> {
        cmd.validate()?;
        metrics::counter!("order_lookups_total").increment(1);

        let Ok(code) = OrderCode::parse(&cmd.order_number) else {
            tracing::debug!(order_number = %cmd.order_number, "not a well-formed order code");
            return Ok(None);
        };
        Ok(self.store.find_order(&code).await?)
    }

    /// Lists every order in storage order.
    pub async fn list_orders(&self) -> Result<Vec<Order>, DomainError> {
        Ok(self.store.list_orders().await?)
    }

    async fn unused_code(&self) -> Result<OrderCode, DomainError> {
        for attempt in 1..=self.max_code_attempts {
            let code = self.codes.next_code();
            if !self.store.order_code_exists(&code).await? {
                return Ok(code);
            }
            metrics::counter!("order_code_collisions_total").increment(1);
            tracing::debug!(%code, attempt, "order code already taken");
        }

        Err(DomainError::CodeSpaceExhausted {
            attempts: self.max_code_attempts,
        })
    }
}
