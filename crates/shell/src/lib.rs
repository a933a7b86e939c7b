//! Text presentation shell for the stock tracker.
//!
//! Reads one command per line, runs it through the product catalog and order
//! ledger, and renders the outcome as text. The shell holds no state of its
//! own; everything lives in the store.

pub mod config;
pub mod error;
pub mod input;

use domain::{OrderLedger, ProductCatalog, StockStore};

use config::Config;
use error::ShellError;
use input::{HELP, ShellCommand};

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text.
    Reply(String),
    /// Nothing to print (blank line).
    Silent,
    /// Leave the shell.
    Quit,
}

/// Dispatches parsed lines to the catalog and ledger services.
pub struct Shell<S: StockStore> {
    catalog: ProductCatalog<S>,
    ledger: OrderLedger<S>,
}

impl<S: StockStore + Clone> Shell<S> {
    /// Creates a shell whose services share `store`.
    pub fn new(store: S, config: &Config) -> Self {
        Self {
            catalog: ProductCatalog::new(store.clone()),
            ledger: OrderLedger::new(store).with_max_code_attempts(config.max_code_attempts),
        }
    }
}

impl<S: StockStore> Shell<S> {
    /// Handles one input line. Errors are rendered into the reply.
    pub async fn execute(&self, line: &str) -> Outcome {
        let result = match ShellCommand::parse(line) {
            Ok(Some(ShellCommand::Quit)) => return Outcome::Quit,
            Ok(Some(command)) => self.run(command).await,
            Ok(None) => return Outcome::Silent,
            Err(err) => Err(err),
        };

        match result {
            Ok(text) => Outcome::Reply(text),
            Err(err) => {
                if err.is_internal() {
                    tracing::error!(error = %err, "storage failure");
                }
                Outcome::Reply(err.user_message())
            }
        }
    }

    async fn run(&self, command: ShellCommand) -> Result<String, ShellError> {
        match command {
            ShellCommand::Add(cmd) => {
                let product = self.catalog.add_product(cmd).await?;
                Ok(format!(
                    "Added {} with stock {}.",
                    product.name, product.stock_quantity
                ))
            }
            ShellCommand::Update(cmd) => {
                let name = cmd.name.clone();
                let stock = cmd.stock_quantity;
                match self.catalog.update_stock(cmd).await? {
                    0 => Ok(format!("No product named {name}; nothing updated.")),
                    rows => Ok(format!("Stock of {name} set to {stock} ({rows} row(s)).")),
                }
            }
            ShellCommand::Delete(cmd) => {
                let name = cmd.name.clone();
                match self.catalog.delete_product(cmd).await? {
                    0 => Ok(format!("No product named {name}; nothing deleted.")),
                    rows => Ok(format!("Deleted {name} ({rows} row(s)).")),
                }
            }
            ShellCommand::List => {
                let products = self.catalog.list_products().await?;
                if products.is_empty() {
                    return Ok("No products.".to_string());
                }
                Ok(products
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.stock_quantity))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            ShellCommand::Order(cmd) => {
                let placed = self.ledger.create_order(cmd).await?;
                Ok(format!(
                    "Order for {} x {} created. Order number: {}. Remaining stock: {}.",
                    placed.order.quantity,
                    placed.order.product_name,
                    placed.order.order_number,
                    placed.remaining_stock
                ))
            }
            ShellCommand::Check(cmd) => {
                let code = cmd.order_number.clone();
                let order = self
                    .ledger
                    .get_order_by_number(cmd)
                    .await?
                    .ok_or(ShellError::OrderNotFound(code))?;
                Ok(format!(
                    "Order number: {}\nProduct: {}\nQuantity: {}",
                    order.order_number, order.product_name, order.quantity
                ))
            }
            ShellCommand::Orders => {
                let orders = self.ledger.list_orders().await?;
                if orders.is_empty() {
                    return Ok("No orders.".to_string());
                }
                Ok(orders
                    .iter()
                    .map(|o| format!("{}  {} x {}", o.order_number, o.quantity, o.product_name))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            ShellCommand::Help => Ok(HELP.to_string()),
            // Handled in execute before dispatch.
            ShellCommand::Quit => Ok(String::new()),
        }
    }
}
